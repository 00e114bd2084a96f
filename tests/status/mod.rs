mod status_lists_every_section;
mod status_outside_repository;
