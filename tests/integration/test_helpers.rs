use stack_sync::errors::Result;
use stack_sync::stack::{Confirm, Reporter, SyncPlan};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run a git command and return trimmed stdout, panicking on failure
pub fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Git command should run");

    if !output.status.success() {
        panic!(
            "Git command failed: git {}\nStderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Configure identity so commits work on CI machines without global config
fn configure_identity(repo_path: &Path) {
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "core.autocrlf", "false"]);
}

/// Create a commit touching `filename` and return its hash
pub fn create_commit(repo_path: &Path, message: &str, filename: &str) -> String {
    std::fs::write(repo_path.join(filename), format!("Content for {message}\n")).unwrap();
    git(repo_path, &["add", filename]);
    git(repo_path, &["commit", "-m", message]);
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Hash a local branch points at
pub fn branch_head(repo_path: &Path, branch: &str) -> String {
    git(repo_path, &["rev-parse", &format!("refs/heads/{branch}")])
}

/// Hash a branch points at in a bare repository, if it exists there
pub fn remote_head(remote_path: &Path, branch: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", &format!("refs/heads/{branch}")])
        .current_dir(remote_path)
        .output()
        .expect("Git command should run");
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// A working repository wired to a bare `origin`, with `main` pushed
pub struct TestRepo {
    _work_dir: TempDir,
    _remote_dir: TempDir,
    pub path: PathBuf,
    pub remote: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let work_dir = TempDir::new().unwrap();
        let remote_dir = TempDir::new().unwrap();
        let path = work_dir.path().to_path_buf();
        let remote = remote_dir.path().to_path_buf();

        git(&remote, &["init", "--bare"]);
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        git(&path, &["init"]);
        configure_identity(&path);
        std::fs::write(path.join("README.md"), "# Test Repository").unwrap();
        git(&path, &["add", "."]);
        git(&path, &["commit", "-m", "Initial commit"]);
        git(&path, &["branch", "-M", "main"]);
        git(&path, &["remote", "add", "origin", remote.to_str().unwrap()]);
        git(&path, &["push", "origin", "main"]);

        Self {
            _work_dir: work_dir,
            _remote_dir: remote_dir,
            path,
            remote,
        }
    }

    /// Build `base-MASTER` with one commit per subject and create stale
    /// branches `base-<N>` at `main` for the given positions.
    /// Returns the commit hashes in creation order.
    pub fn with_stack(&self, subjects: &[&str], branches: &[&str]) -> Vec<String> {
        git(&self.path, &["checkout", "-b", "base-MASTER"]);
        let hashes = subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| create_commit(&self.path, subject, &format!("file{i}.txt")))
            .collect();
        for branch in branches {
            git(&self.path, &["branch", branch, "main"]);
        }
        hashes
    }

    /// Clone the remote into a second working copy
    pub fn second_clone(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clone");
        git(
            dir.path(),
            &["clone", self.remote.to_str().unwrap(), path.to_str().unwrap()],
        );
        configure_identity(&path);
        (dir, path)
    }
}

/// Answers the prompt as if the operator typed `input`
pub struct Answer(pub &'static str);

impl Confirm for Answer {
    fn confirm(&self) -> Result<bool> {
        Ok(stack_sync::cli::confirm::is_confirmation(self.0))
    }
}

/// Collects reporter output instead of printing it
#[derive(Default)]
pub struct Collect {
    pub plans: RefCell<Vec<SyncPlan>>,
    pub commands: RefCell<Vec<String>>,
}

impl Reporter for Collect {
    fn plan(&self, plan: &SyncPlan) {
        self.plans.borrow_mut().push(plan.clone());
    }

    fn command(&self, line: &str) {
        self.commands.borrow_mut().push(line.to_string());
    }
}
