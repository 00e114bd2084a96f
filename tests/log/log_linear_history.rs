use crate::common::command::{
    LOG_DATE, commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_linear_history(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first_id = head_commit_id(dir);
    commit_file(dir, "3.txt", "three", "Add three");
    let second_id = head_commit_id(dir);

    let output = run_gitlet_command(dir, &["log"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let expected_head = format!(
        "===\ncommit {second_id}\nDate: {LOG_DATE}\nAdd three\n\n\
         ===\ncommit {first_id}\nDate: {LOG_DATE}\nInitial files\n\n"
    );
    assert!(stdout.starts_with(&expected_head), "unexpected log:\n{stdout}");
    assert!(stdout.ends_with("Date: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n"));
    assert_eq!(stdout.matches("===\n").count(), 3);

    Ok(())
}
