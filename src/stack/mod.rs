//! Stack reconciliation and synchronization
//!
//! - Parsing stack positions out of commit subjects and branch names
//! - Scanning the commit range and the local branches into position indexes
//! - Reconciling the two indexes into a validated plan
//! - Applying the plan with local branch updates and one lease-protected push

pub mod position;
pub mod reconcile;
pub mod scanner;
pub mod sync;


pub use position::{parse_branch_position, parse_commit_trailer, sentinel_branch, StackPosition};
pub use reconcile::{reconcile, PlanEntry, SyncPlan};
pub use scanner::{scan_branches, scan_commits, BranchIndex, BranchRecord, CommitIndex, CommitRecord};
pub use sync::{plan_sync, run_sync, Confirm, Reporter, SyncOutcome, SyncReport, Synchronizer};
