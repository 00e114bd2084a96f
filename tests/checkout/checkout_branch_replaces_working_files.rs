use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_branch_replaces_working_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    run_gitlet_command(dir, &["checkout", "side"]).assert().success().stdout("");
    commit_file(dir, "1.txt", "side one", "Edit one on side");
    commit_file(dir, "side.txt", "side", "Side only");

    run_gitlet_command(dir, &["checkout", "master"]).assert().success().stdout("");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));
    assert_eq!(read_file(&dir.join("side.txt")), None);

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("side one"));
    assert_eq!(read_file(&dir.join("side.txt")).as_deref(), Some("side"));
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet/HEAD")).ok().as_deref(),
        Some("ref: refs/heads/side\n")
    );
}
