use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_prints_matching_commit_ids(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "3.txt", "three", "Same message");
    let first_id = head_commit_id(dir);
    commit_file(dir, "4.txt", "four", "Same message");
    let second_id = head_commit_id(dir);

    let mut expected = [first_id, second_id];
    expected.sort();

    run_gitlet_command(dir, &["find", "Same message"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", expected[0], expected[1]));

    run_gitlet_command(dir, &["find", "Missing message"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
