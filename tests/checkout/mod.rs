mod checkout_branch_replaces_working_files;
mod checkout_file_from_commit_prefix;
mod checkout_incorrect_operands;
mod checkout_untracked_file_in_the_way;
