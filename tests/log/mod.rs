mod find_prints_matching_commit_ids;
mod global_log_lists_every_commit;
mod log_linear_history;
