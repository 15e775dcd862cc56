pub mod repository;

pub use repository::GitRepository;

use crate::errors::{StackSyncError, Result};

/// A commit as returned by a log query: full hash plus subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub id: String,
    pub subject: String,
}

impl CommitSummary {
    pub fn new<I: Into<String>, S: Into<String>>(id: I, subject: S) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
        }
    }
}

/// The operations stack-sync needs from version control.
///
/// Queries have no side effects. Mutations either complete or return an
/// error; callers never retry.
pub trait VersionControl {
    /// Commits reachable from `tip` but not from `exclude`, most recent first
    fn list_commits(&self, tip: &str, exclude: &str) -> Result<Vec<CommitSummary>>;

    /// Short names of all local branches
    fn list_branches(&self) -> Result<Vec<String>>;

    /// Create or move a local branch to `target`, discarding its old value
    fn force_branch(&self, name: &str, target: &str) -> Result<()>;

    /// Push `refs` to `remote` in one operation with `--force-with-lease`
    fn push_with_lease(&self, remote: &str, refs: &[String]) -> Result<()>;
}

/// Arguments of the single stack push: `push <remote> <refs...>` with lease
/// protection, applied atomically by the remote.
pub fn push_args(remote: &str, refs: &[String]) -> Vec<String> {
    let mut args = vec!["push".to_string(), remote.to_string()];
    args.extend(refs.iter().cloned());
    args.push("--force-with-lease".to_string());
    args.push("--atomic".to_string());
    args
}

/// Get the current working directory as a Git repository
pub fn get_current_repository() -> Result<GitRepository> {
    let current_dir = std::env::current_dir()
        .map_err(|e| StackSyncError::config(format!("Could not get current directory: {e}")))?;

    GitRepository::open(&current_dir)
}
