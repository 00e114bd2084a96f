use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_untracked_file_in_the_way(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    commit_file(dir, "3.txt", "tracked on side", "Add three");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    write_file(FileSpec::new(dir.join("3.txt"), "precious".to_string()));

    run_gitlet_command(dir, &["checkout", "side"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(read_file(&dir.join("3.txt")).as_deref(), Some("precious"));
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet/HEAD")).ok().as_deref(),
        Some("ref: refs/heads/master\n")
    );
}
