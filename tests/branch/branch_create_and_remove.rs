use crate::common::command::{branch_commit_id, head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn branch_create_and_remove(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(branch_commit_id(dir, "feature"), head_commit_id(dir));

    run_gitlet_command(dir, &["rm-branch", "feature"])
        .assert()
        .success()
        .stdout("");
    assert!(!dir.join(".gitlet/refs/heads/feature").exists());
}
