use crate::common::command::{head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn cat_file_prints_objects(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));
    let output = run_gitlet_command(dir, &["hash-object", "-w", "hello.txt"]).output()?;
    let blob_id = String::from_utf8(output.stdout)?.trim().to_string();

    run_gitlet_command(dir, &["cat-file", &blob_id])
        .assert()
        .success()
        .stdout("hello");

    let head_id = head_commit_id(dir);
    run_gitlet_command(dir, &["cat-file", &head_id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("branch master\n"))
        .stdout(predicate::str::contains("Initial files"));

    Ok(())
}
