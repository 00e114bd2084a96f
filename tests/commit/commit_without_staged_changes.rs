use crate::common::command::{gitlet_commit, init_repository_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_without_staged_changes(init_repository_dir: TempDir) {
    gitlet_commit(init_repository_dir.path(), "again")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
