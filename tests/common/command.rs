use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Commit date every test commit is created with
pub const COMMIT_DATE: &str = "2024-03-05 10:20:30 +0000";

/// `COMMIT_DATE` as printed by `log`
pub const LOG_DATE: &str = "Tue Mar 5 10:20:30 2024 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with `1.txt` = "one" and `2.txt` = "two" committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("2.txt"),
        "two".to_string(),
    ));

    gitlet_add(repository_dir.path(), &["1.txt", "2.txt"]);
    gitlet_commit(repository_dir.path(), "Initial files")
        .assert()
        .success();

    repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.envs(vec![
        ("NO_PAGER", "1"),
        ("NO_COLOR", "1"),
        ("GITLET_COMMIT_DATE", COMMIT_DATE),
    ]);
    cmd.env_remove("GITLET_ABBREV_MIN");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    run_gitlet_command(dir, &["commit", message])
}

pub fn gitlet_add(dir: &Path, files: &[&str]) {
    for file in files {
        run_gitlet_command(dir, &["add", file])
            .assert()
            .success()
            .stdout("");
    }
}

/// Write, stage and commit a single file
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    gitlet_add(dir, &[name]);
    gitlet_commit(dir, message).assert().success().stdout("");
}

/// Id of the commit the current branch points at
pub fn head_commit_id(dir: &Path) -> String {
    let head = std::fs::read_to_string(dir.join(".gitlet/HEAD")).expect("Failed to read HEAD");
    let ref_path = head
        .trim()
        .strip_prefix("ref: refs/heads/")
        .expect("HEAD is not a symbolic ref");

    branch_commit_id(dir, ref_path)
}

pub fn branch_commit_id(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(".gitlet/refs/heads").join(branch))
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}

/// Parents of a commit, first parent first, read through `cat-file`
pub fn commit_parents(dir: &Path, commit_id: &str) -> Vec<String> {
    let output = run_gitlet_command(dir, &["cat-file", commit_id])
        .output()
        .expect("Failed to run cat-file");
    let stdout = String::from_utf8(output.stdout).expect("cat-file printed invalid UTF-8");

    stdout
        .lines()
        .take_while(|line| !line.is_empty())
        .filter_map(|line| {
            line.strip_prefix("parent ")
                .or_else(|| line.strip_prefix("merge-parent "))
        })
        .map(str::to_string)
        .collect()
}
