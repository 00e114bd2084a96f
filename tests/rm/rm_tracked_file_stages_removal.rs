use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_tracked_file_stages_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["rm", "1.txt"])
        .assert()
        .success()
        .stdout("");
    assert!(!dir.join("1.txt").exists());

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n1.txt\n\n"));

    gitlet_commit(dir, "remove one").assert().success();

    run_gitlet_command(dir, &["checkout", "--", "1.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
}
