mod rm_tracked_file_stages_removal;
mod rm_untracked_file_reports_error;
