use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_file_from_commit_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first_id = head_commit_id(dir);
    commit_file(dir, "1.txt", "one v2", "Second version");

    run_gitlet_command(dir, &["checkout", &first_id[..8], "--", "1.txt"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));

    write_file(FileSpec::new(dir.join("1.txt"), "scribbled".to_string()));
    run_gitlet_command(dir, &["checkout", "--", "1.txt"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one v2"));

    run_gitlet_command(dir, &["checkout", &first_id[..8], "--", "3.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");

    run_gitlet_command(dir, &["checkout", "0000000", "--", "1.txt"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
}
