use crate::errors::{Result, StackSyncError};
use crate::stack::position::sentinel_branch;
use crate::stack::scanner::{BranchIndex, CommitIndex};
use crate::stack::StackPosition;
use serde::Serialize;
use std::collections::BTreeSet;

/// One branch update in a [`SyncPlan`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub position: StackPosition,
    pub branch: String,
    pub target: String,
    pub message: String,
}

/// Validated branch updates for one stack, ascending by position.
///
/// Only [`reconcile`] builds a plan, and only when every commit position has
/// exactly one branch and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    branch_base: String,
    sentinel: String,
    entries: Vec<PlanEntry>,
}

impl SyncPlan {
    pub fn branch_base(&self) -> &str {
        &self.branch_base
    }

    /// The `{base}-MASTER` branch pushed alongside the entries
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every planned branch followed by the sentinel, in push order
    pub fn push_refs(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.branch.clone())
            .chain(std::iter::once(self.sentinel.clone()))
            .collect()
    }
}

/// Join the two indexes into a plan, failing unless their positions match
/// exactly.
pub fn reconcile(
    branch_base: &str,
    commits: &CommitIndex,
    branches: &BranchIndex,
) -> Result<SyncPlan> {
    let commit_positions: BTreeSet<StackPosition> = commits.keys().copied().collect();
    let branch_positions: BTreeSet<StackPosition> = branches.keys().copied().collect();

    if commit_positions != branch_positions {
        return Err(StackSyncError::PositionMismatch {
            commit_only: commit_positions
                .difference(&branch_positions)
                .copied()
                .collect(),
            branch_only: branch_positions
                .difference(&commit_positions)
                .copied()
                .collect(),
        });
    }

    // BTreeMap iteration is already ascending by position
    let entries = commits
        .values()
        .zip(branches.values())
        .map(|(commit, branch)| PlanEntry {
            position: commit.position,
            branch: branch.name.clone(),
            target: commit.id.clone(),
            message: commit.message.clone(),
        })
        .collect();

    Ok(SyncPlan {
        branch_base: branch_base.to_string(),
        sentinel: sentinel_branch(branch_base),
        entries,
    })
}
