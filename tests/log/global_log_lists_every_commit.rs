use crate::common::command::{
    branch_commit_id, commit_file, head_commit_id, init_repository_dir, run_gitlet_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let shared_id = head_commit_id(dir);

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    commit_file(dir, "master.txt", "master", "Master work");
    let master_id = head_commit_id(dir);

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    commit_file(dir, "side.txt", "side", "Side work");
    let side_id = branch_commit_id(dir, "side");

    // The log of side no longer reaches the master-only commit
    let log = String::from_utf8(run_gitlet_command(dir, &["log"]).output()?.stdout)?;
    assert!(!log.contains(&master_id));

    let global_log = String::from_utf8(run_gitlet_command(dir, &["global-log"]).output()?.stdout)?;
    for commit_id in [&shared_id, &master_id, &side_id] {
        assert!(global_log.contains(&format!("commit {commit_id}\n")));
    }
    assert_eq!(global_log.matches("===\n").count(), 4);

    Ok(())
}
