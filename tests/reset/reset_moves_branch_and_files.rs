use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn reset_moves_branch_and_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first_id = head_commit_id(dir);
    commit_file(dir, "3.txt", "three", "Add three");
    let second_id = head_commit_id(dir);

    run_gitlet_command(dir, &["reset", &first_id])
        .assert()
        .success()
        .stdout("");

    assert_eq!(head_commit_id(dir), first_id);
    assert_eq!(read_file(&dir.join("3.txt")), None);
    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(second_id.as_str()).not());

    // The abandoned commit stays reachable by id
    run_gitlet_command(dir, &["reset", &second_id[..10]])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.join("3.txt")).as_deref(), Some("three"));

    run_gitlet_command(dir, &["reset", "ffffffff"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
}
