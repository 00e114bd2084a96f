use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn status_outside_repository(repository_dir: TempDir) {
    run_gitlet_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Not in an initialized Gitlet directory.\n");
}
