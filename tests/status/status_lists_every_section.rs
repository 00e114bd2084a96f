use crate::common::command::{gitlet_add, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, delete_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn status_lists_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    gitlet_add(dir, &["staged.txt"]);
    run_gitlet_command(dir, &["rm", "2.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "edited".to_string()));
    write_file(FileSpec::new(dir.join("loose.txt"), "loose".to_string()));

    let expected = "\
=== Branches ===
*master
other

=== Staged Files ===
staged.txt

=== Removed Files ===
2.txt

=== Modifications Not Staged For Commit ===
1.txt (modified)

=== Untracked Files ===
loose.txt

";
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(expected);

    delete_file(&dir.join("staged.txt"));
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("staged.txt (deleted)\n"));
}
