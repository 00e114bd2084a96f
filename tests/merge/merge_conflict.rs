use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_conflict(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "Master edit");

    run_gitlet_command(dir, &["checkout", "topic"]).assert().success();
    commit_file(dir, "1.txt", "topic\n", "Topic edit");
    run_gitlet_command(dir, &["rm", "2.txt"]).assert().success();
    commit_file(dir, "3.txt", "three", "Add three");

    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    commit_file(dir, "2.txt", "two on master", "Master edits two");

    run_gitlet_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("1.txt")).as_deref(),
        Some("<<<<<<< HEAD\nmaster\n=======\ntopic\n>>>>>>>\n")
    );
    assert_eq!(
        read_file(&dir.join("2.txt")).as_deref(),
        Some("<<<<<<< HEAD\ntwo on master=======\n>>>>>>>\n")
    );
    assert_eq!(read_file(&dir.join("3.txt")).as_deref(), Some("three"));

    // The conflicted merge is committed like any other
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("=== Staged Files ===\n\n"));
}
