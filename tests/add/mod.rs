mod add_missing_file_reports_error;
mod add_unchanged_file_unstages_it;
