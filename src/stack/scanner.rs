use crate::errors::{Result, ScanSource, StackSyncError};
use crate::git::VersionControl;
use crate::stack::position::{parse_branch_position, parse_commit_trailer, sentinel_branch};
use crate::stack::StackPosition;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// A stack commit found by its `[N/n]` trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub position: StackPosition,
    pub id: String,
    pub message: String,
}

/// A per-position branch found by its `{base}-N` name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub position: StackPosition,
    pub name: String,
}

pub type CommitIndex = BTreeMap<StackPosition, CommitRecord>;
pub type BranchIndex = BTreeMap<StackPosition, BranchRecord>;

/// Index the commits between `trunk` and `{branch_base}-MASTER` by their
/// trailer position. Commits without a trailer are skipped.
pub fn scan_commits<V: VersionControl + ?Sized>(
    vcs: &V,
    branch_base: &str,
    trunk: &str,
) -> Result<CommitIndex> {
    let tip = sentinel_branch(branch_base);
    let mut index = CommitIndex::new();

    for commit in vcs.list_commits(&tip, trunk)? {
        let Some(position) = parse_commit_trailer(&commit.subject) else {
            debug!("Skipping {} without stack trailer: {}", commit.id, commit.subject);
            continue;
        };

        match index.entry(position) {
            Entry::Occupied(existing) => {
                return Err(StackSyncError::DuplicatePosition {
                    position,
                    scan: ScanSource::Commit,
                    first: existing.get().message.clone(),
                    second: commit.subject,
                });
            }
            Entry::Vacant(slot) => {
                debug!("Commit {} is position {}", commit.id, position);
                slot.insert(CommitRecord {
                    position,
                    id: commit.id,
                    message: commit.subject,
                });
            }
        }
    }

    Ok(index)
}

/// Index local branches named `{branch_base}-N[-suffix]` by position.
pub fn scan_branches<V: VersionControl + ?Sized>(
    vcs: &V,
    branch_base: &str,
) -> Result<BranchIndex> {
    let mut index = BranchIndex::new();

    for name in vcs.list_branches()? {
        let Some(position) = parse_branch_position(&name, branch_base) else {
            continue;
        };

        match index.entry(position) {
            Entry::Occupied(existing) => {
                return Err(StackSyncError::DuplicatePosition {
                    position,
                    scan: ScanSource::Branch,
                    first: existing.get().name.clone(),
                    second: name,
                });
            }
            Entry::Vacant(slot) => {
                debug!("Branch {} is position {}", name, position);
                slot.insert(BranchRecord { position, name });
            }
        }
    }

    Ok(index)
}
