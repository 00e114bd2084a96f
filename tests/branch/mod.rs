mod branch_create_and_remove;
mod branch_errors;
