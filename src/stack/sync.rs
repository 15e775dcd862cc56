use crate::config::SyncSettings;
use crate::errors::Result;
use crate::git::{push_args, VersionControl};
use crate::stack::reconcile::{reconcile, SyncPlan};
use crate::stack::scanner::{scan_branches, scan_commits};
use crate::utils::display_command;
use tracing::{debug, info};

/// Operator confirmation before anything is mutated
pub trait Confirm {
    /// True only when the operator explicitly agreed
    fn confirm(&self) -> Result<bool>;
}

/// Receives what the operator should see while a sync runs
pub trait Reporter {
    /// Show the planned branch updates
    fn plan(&self, plan: &SyncPlan);

    /// Echo a git command line just before it runs
    fn command(&self, line: &str);
}

/// Branches touched by a completed sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub remote: String,
    pub updated: Vec<String>,
    pub pushed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Branches were updated and pushed
    Applied(SyncReport),
    /// The operator did not confirm; nothing changed
    Declined,
}

/// Scan both sides of the stack and reconcile them into a plan.
pub fn plan_sync<V: VersionControl + ?Sized>(
    vcs: &V,
    branch_base: &str,
    trunk: &str,
) -> Result<SyncPlan> {
    let commits = scan_commits(vcs, branch_base, trunk)?;
    let branches = scan_branches(vcs, branch_base)?;
    debug!(
        "Scanned {} stack commits and {} stack branches",
        commits.len(),
        branches.len()
    );
    reconcile(branch_base, &commits, &branches)
}

/// Plan, show, confirm and apply a sync of one stack.
pub fn run_sync<V, R, C>(
    vcs: &V,
    settings: &SyncSettings,
    branch_base: &str,
    reporter: &R,
    confirm: &C,
) -> Result<SyncOutcome>
where
    V: VersionControl + ?Sized,
    R: Reporter + ?Sized,
    C: Confirm + ?Sized,
{
    let plan = plan_sync(vcs, branch_base, &settings.trunk)?;
    reporter.plan(&plan);

    if !confirm.confirm()? {
        debug!("Sync of '{}' declined", branch_base);
        return Ok(SyncOutcome::Declined);
    }

    let report = Synchronizer::new(vcs, &settings.remote, reporter).apply(&plan)?;
    Ok(SyncOutcome::Applied(report))
}

/// Applies a [`SyncPlan`]: local branch updates first, then one push.
pub struct Synchronizer<'a, V: ?Sized, R: ?Sized> {
    vcs: &'a V,
    remote: &'a str,
    reporter: &'a R,
}

impl<'a, V, R> Synchronizer<'a, V, R>
where
    V: VersionControl + ?Sized,
    R: Reporter + ?Sized,
{
    pub fn new(vcs: &'a V, remote: &'a str, reporter: &'a R) -> Self {
        Self {
            vcs,
            remote,
            reporter,
        }
    }

    /// Point each planned branch at its commit in position order, then push
    /// them and the sentinel with `--force-with-lease`.
    ///
    /// The first failure stops everything. Branches already moved stay moved
    /// locally; the remote is untouched until the push.
    pub fn apply(&self, plan: &SyncPlan) -> Result<SyncReport> {
        let mut updated = Vec::with_capacity(plan.entries().len());
        for entry in plan.entries() {
            self.reporter.command(&display_command(
                "git",
                &["branch", "-f", entry.branch.as_str(), entry.target.as_str()],
            ));
            self.vcs.force_branch(&entry.branch, &entry.target)?;
            updated.push(entry.branch.clone());
        }

        let refs = plan.push_refs();
        self.reporter
            .command(&display_command("git", &push_args(self.remote, &refs)));
        self.vcs.push_with_lease(self.remote, &refs)?;

        info!(
            "Synchronized {} branches of '{}' to {}",
            updated.len(),
            plan.branch_base(),
            self.remote
        );
        Ok(SyncReport {
            remote: self.remote.to_string(),
            updated,
            pushed: refs,
        })
    }
}
