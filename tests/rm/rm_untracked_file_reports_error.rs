use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn rm_untracked_file_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("loose.txt"), "loose".to_string()));

    run_gitlet_command(dir, &["rm", "loose.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");
    assert!(dir.join("loose.txt").exists());
}
