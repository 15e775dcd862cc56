use crate::integration::test_helpers::{create_commit, git, remote_head, Answer, Collect, TestRepo};
use stack_sync::config::SyncSettings;
use stack_sync::git::GitRepository;
use stack_sync::stack::run_sync;
use stack_sync::StackSyncError;

fn sync(repo: &TestRepo) -> stack_sync::errors::Result<()> {
    let git_repo = GitRepository::open(&repo.path).unwrap();
    run_sync(
        &git_repo,
        &SyncSettings::default(),
        "base",
        &Collect::default(),
        &Answer("y"),
    )
    .map(|_| ())
}

#[test]
fn test_concurrent_remote_change_rejects_push() {
    let repo = TestRepo::new();
    repo.with_stack(&["[1/n] foo", "[2/n] bar"], &["base-1", "base-2"]);
    sync(&repo).expect("first sync should succeed");

    // Someone else moves base-2 on the remote
    let (_clone_dir, clone) = repo.second_clone();
    git(&clone, &["checkout", "base-2"]);
    let foreign = create_commit(&clone, "someone else's work", "foreign.txt");
    git(&clone, &["push", "origin", "base-2"]);

    let err = sync(&repo).unwrap_err();

    assert!(
        matches!(err, StackSyncError::PushRejected { .. }),
        "expected lease rejection, got {err:?}"
    );
    assert_eq!(remote_head(&repo.remote, "base-2").as_deref(), Some(foreign.as_str()));
}

#[test]
fn test_rejected_push_updates_no_remote_ref() {
    let repo = TestRepo::new();
    repo.with_stack(&["[1/n] foo", "[2/n] bar"], &["base-1", "base-2"]);
    sync(&repo).expect("first sync should succeed");
    let pushed_base_1 = remote_head(&repo.remote, "base-1");

    let (_clone_dir, clone) = repo.second_clone();
    git(&clone, &["checkout", "base-2"]);
    create_commit(&clone, "someone else's work", "foreign.txt");
    git(&clone, &["push", "origin", "base-2"]);

    // Rewrite the local stack so base-1 would move too
    git(&repo.path, &["checkout", "base-MASTER"]);
    git(&repo.path, &["reset", "--hard", "main"]);
    create_commit(&repo.path, "[1/n] foo v2", "v2-1.txt");
    create_commit(&repo.path, "[2/n] bar v2", "v2-2.txt");

    assert!(sync(&repo).is_err());
    assert_eq!(remote_head(&repo.remote, "base-1"), pushed_base_1);
}

#[test]
fn test_rerun_after_fetch_succeeds() {
    let repo = TestRepo::new();
    let hashes = repo.with_stack(&["[1/n] foo", "[2/n] bar"], &["base-1", "base-2"]);
    sync(&repo).expect("first sync should succeed");

    let (_clone_dir, clone) = repo.second_clone();
    git(&clone, &["checkout", "base-2"]);
    create_commit(&clone, "someone else's work", "foreign.txt");
    git(&clone, &["push", "origin", "base-2"]);
    assert!(sync(&repo).is_err());

    // Having seen the remote state, the operator re-runs from scratch
    git(&repo.path, &["fetch", "origin"]);
    sync(&repo).expect("sync after fetch should succeed");

    assert_eq!(remote_head(&repo.remote, "base-2").as_deref(), Some(hashes[1].as_str()));
}
