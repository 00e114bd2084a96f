use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_missing_file_reports_error(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .success()
        .stdout("File does not exist.\n");
}
