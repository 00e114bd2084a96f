use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout("");

    let gitlet_dir = repository_dir.path().join(".gitlet");
    for path in ["objects", "commits", "refs/heads"] {
        assert!(gitlet_dir.join(path).is_dir(), "missing {path}");
    }
    assert_eq!(
        std::fs::read_to_string(gitlet_dir.join("HEAD"))?,
        "ref: refs/heads/master\n"
    );
    assert!(gitlet_dir.join("index").is_file());

    run_gitlet_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Date: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n",
        ));

    Ok(())
}
