use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::existing_branch(&["branch", "master"], "A branch with that name already exists.\n")]
#[case::nested_under_existing_branch(&["branch", "master/topic"], "Invalid branch name: master/topic\n")]
#[case::remove_missing_branch(&["rm-branch", "ghost"], "A branch with that name does not exist.\n")]
#[case::remove_current_branch(&["rm-branch", "master"], "Cannot remove the current branch.\n")]
#[case::checkout_missing_branch(&["checkout", "ghost"], "No such branch exists.\n")]
#[case::checkout_current_branch(&["checkout", "master"], "No need to checkout the current branch.\n")]
fn branch_errors(init_repository_dir: TempDir, #[case] args: &[&str], #[case] expected: &str) {
    run_gitlet_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout(expected.to_string());
}
