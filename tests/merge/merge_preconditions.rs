use crate::common::command::{
    commit_file, gitlet_add, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_with_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("3.txt"), "three".to_string()));
    gitlet_add(dir, &["3.txt"]);

    run_gitlet_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");
}

#[rstest]
#[case::missing_branch("ghost", "A branch with that name does not exist.\n")]
#[case::current_branch("master", "Cannot merge a branch with itself.\n")]
fn merge_rejects_branch(init_repository_dir: TempDir, #[case] branch: &str, #[case] expected: &str) {
    run_gitlet_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[rstest]
fn merge_with_untracked_file_in_the_way(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "master.txt", "master", "Master work");
    run_gitlet_command(dir, &["checkout", "topic"]).assert().success();
    commit_file(dir, "3.txt", "three", "Topic work");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    write_file(FileSpec::new(dir.join("3.txt"), "precious".to_string()));

    run_gitlet_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );
}
