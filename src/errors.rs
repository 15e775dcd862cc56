use crate::stack::StackPosition;
use std::collections::BTreeSet;
use std::fmt;

/// Which scan produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    Commit,
    Branch,
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanSource::Commit => write!(f, "commit"),
            ScanSource::Branch => write!(f, "branch"),
        }
    }
}

/// Stack Sync Error Types
#[derive(Debug, thiserror::Error)]
pub enum StackSyncError {
    /// Commit and branch position sets differ
    #[error("{}", mismatch_summary(.commit_only, .branch_only))]
    PositionMismatch {
        commit_only: BTreeSet<StackPosition>,
        branch_only: BTreeSet<StackPosition>,
    },

    /// Two records of one scan claim the same position
    #[error("Duplicate {scan} position {position}: '{first}' and '{second}'")]
    DuplicatePosition {
        position: StackPosition,
        scan: ScanSource,
        first: String,
        second: String,
    },

    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// A revision or branch could not be resolved or updated
    #[error("Reference error: {0}")]
    Reference(String),

    /// An external git command exited unsuccessfully
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The remote moved since we last fetched it
    #[error("Push rejected by lease, re-run after fetching: {details}")]
    PushRejected { details: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StackSyncError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StackSyncError::Config(msg.into())
    }

    pub fn reference<S: Into<String>>(msg: S) -> Self {
        StackSyncError::Reference(msg.into())
    }

    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        StackSyncError::Prompt(msg.into())
    }

    pub fn command_failed<C: Into<String>, S: Into<String>>(command: C, stderr: S) -> Self {
        StackSyncError::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Every position named by a mismatch, empty for other errors
    pub fn mismatched_positions(&self) -> BTreeSet<StackPosition> {
        match self {
            StackSyncError::PositionMismatch {
                commit_only,
                branch_only,
            } => commit_only.union(branch_only).copied().collect(),
            _ => BTreeSet::new(),
        }
    }
}

/// Renders a position set as `{1, 3}`.
pub fn format_positions(positions: &BTreeSet<StackPosition>) -> String {
    let inner = positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{inner}}}")
}

fn mismatch_summary(
    commit_only: &BTreeSet<StackPosition>,
    branch_only: &BTreeSet<StackPosition>,
) -> String {
    let all: BTreeSet<StackPosition> = commit_only.union(branch_only).copied().collect();
    format!(
        "Mismatched branches / commits: {} (commit only: {}, branch only: {})",
        format_positions(&all),
        format_positions(commit_only),
        format_positions(branch_only)
    )
}

pub type Result<T> = std::result::Result<T, StackSyncError>;
