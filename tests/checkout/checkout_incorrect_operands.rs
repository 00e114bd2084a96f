use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::no_operands(&["checkout"])]
#[case::two_files(&["checkout", "--", "1.txt", "2.txt"])]
fn checkout_incorrect_operands(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("Incorrect operands.\n");
}
