use crate::errors::{Result, StackSyncError};
use crate::git::{push_args, CommitSummary, VersionControl};
use crate::utils::display_command;
use crate::utils::spinner::Spinner;
use git2::{Oid, Repository, Sort};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Wrapper around git2::Repository implementing [`VersionControl`].
///
/// Queries and local branch updates go through libgit2. The push shells out
/// to the `git` executable because libgit2 has no `--force-with-lease`.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open the Git repository containing the given path
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| StackSyncError::config(format!("Not a git repository: {}", e)))?;

        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    /// Get repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a reference (branch name, tag, or commit hash) to a commit
    pub fn resolve_reference(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.repo.revparse_single(reference).map_err(|e| {
            StackSyncError::reference(format!(
                "Could not resolve reference '{}': {}",
                reference, e
            ))
        })?;

        obj.peel_to_commit().map_err(|e| {
            StackSyncError::reference(format!(
                "Reference '{}' does not point to a commit: {}",
                reference, e
            ))
        })
    }

    /// Get the commit hash at the head of a local branch
    pub fn get_branch_head(&self, branch_name: &str) -> Result<String> {
        let branch = self
            .repo
            .find_branch(branch_name, git2::BranchType::Local)
            .map_err(|e| {
                StackSyncError::reference(format!(
                    "Could not find branch '{}': {}",
                    branch_name, e
                ))
            })?;

        let commit = branch.get().peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    fn git_command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(&self.path);
        command
    }
}

impl VersionControl for GitRepository {
    fn list_commits(&self, tip: &str, exclude: &str) -> Result<Vec<CommitSummary>> {
        let tip_commit = self.resolve_reference(tip)?;
        let exclude_commit = self.resolve_reference(exclude)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(tip_commit.id())?;
        revwalk.hide(exclude_commit.id())?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let subject = commit
                .summary_bytes()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default();
            commits.push(CommitSummary::new(commit.id().to_string(), subject));
        }

        debug!("Found {} commits in {}..{}", commits.len(), exclude, tip);
        Ok(commits)
    }

    fn list_branches(&self) -> Result<Vec<String>> {
        let branches = self.repo.branches(Some(git2::BranchType::Local))?;

        let mut branch_names = Vec::new();
        for branch in branches {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                branch_names.push(name.to_string());
            }
        }

        Ok(branch_names)
    }

    fn force_branch(&self, name: &str, target: &str) -> Result<()> {
        let oid = Oid::from_str(target).map_err(|e| {
            StackSyncError::reference(format!("Invalid commit id '{}': {}", target, e))
        })?;
        let commit = self.repo.find_commit(oid).map_err(|e| {
            StackSyncError::reference(format!("Could not find commit '{}': {}", target, e))
        })?;

        self.repo.branch(name, &commit, true).map_err(|e| {
            StackSyncError::reference(format!("Could not update branch '{}': {}", name, e))
        })?;

        debug!("Pointed branch '{}' at {}", name, target);
        Ok(())
    }

    fn push_with_lease(&self, remote: &str, refs: &[String]) -> Result<()> {
        let args = push_args(remote, refs);
        let command_line = display_command("git", &args);

        let spinner = Spinner::new(format!("Pushing {} refs to {}", refs.len(), remote));
        let output = self.git_command().args(&args).output();
        spinner.stop();
        let output = output?;

        if output.status.success() {
            info!("Pushed {} refs to {}", refs.len(), remote);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.contains("stale info") {
            return Err(StackSyncError::PushRejected { details: stderr });
        }
        Err(StackSyncError::command_failed(command_line, stderr))
    }
}
