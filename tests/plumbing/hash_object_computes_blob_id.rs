use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

const HELLO_BLOB_ID: &str = "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0";

#[rstest]
fn hash_object_computes_blob_id(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));
    let blob_path = dir
        .join(".gitlet/objects")
        .join(&HELLO_BLOB_ID[..2])
        .join(&HELLO_BLOB_ID[2..]);

    run_gitlet_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_BLOB_ID}\n"));
    assert!(!blob_path.exists());

    run_gitlet_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_BLOB_ID}\n"));
    assert!(blob_path.is_file());
}
