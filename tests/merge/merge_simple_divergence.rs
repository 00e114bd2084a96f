use crate::common::command::{
    branch_commit_id, commit_file, commit_parents, gitlet_commit, head_commit_id,
    init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_simple_divergence(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    commit_file(dir, "3.txt", "three", "Add three");
    run_gitlet_command(dir, &["branch", "topic"]).assert().success();
    commit_file(dir, "1.txt", "one on master", "Edit one");

    run_gitlet_command(dir, &["checkout", "topic"]).assert().success();
    commit_file(dir, "2.txt", "two on topic", "Edit two");
    run_gitlet_command(dir, &["rm", "3.txt"]).assert().success();
    commit_file(dir, "topic.txt", "topic", "Add topic file");
    let topic_id = branch_commit_id(dir, "topic");

    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    let master_id = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one on master"));
    assert_eq!(read_file(&dir.join("2.txt")).as_deref(), Some("two on topic"));
    assert_eq!(read_file(&dir.join("topic.txt")).as_deref(), Some("topic"));
    // Unchanged on master and removed on topic
    assert_eq!(read_file(&dir.join("3.txt")), None);

    let merge_id = head_commit_id(dir);
    assert_eq!(commit_parents(dir, &merge_id), vec![master_id, topic_id]);

    gitlet_commit(dir, "after merge")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
