use crate::common::command::{gitlet_add, gitlet_commit, init_repository_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_unchanged_file_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    gitlet_add(dir, &["1.txt"]);
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    gitlet_add(dir, &["1.txt"]);

    gitlet_commit(dir, "nothing new")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
