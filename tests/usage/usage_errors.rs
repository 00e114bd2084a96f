use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::missing_command(&[], "Please enter a command.\n")]
#[case::unknown_command(&["push"], "No command with that name exists.\n")]
#[case::missing_operand(&["commit"], "Incorrect operands.\n")]
#[case::extra_operand(&["add", "a.txt", "b.txt"], "Incorrect operands.\n")]
fn usage_errors(repository_dir: TempDir, #[case] args: &[&str], #[case] expected: &str) {
    run_gitlet_command(repository_dir.path(), args)
        .assert()
        .success()
        .stdout(expected.to_string());
}
