use crate::errors::{Result, StackSyncError};
use serde::{Deserialize, Serialize};

/// Where a sync reads from and pushes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Remote receiving the lease-protected push
    pub remote: String,
    /// Revision whose history is excluded from the commit scan
    pub trunk: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            trunk: "main".to_string(),
        }
    }
}

impl SyncSettings {
    /// Build settings from optional overrides, falling back to defaults
    pub fn new(remote: Option<String>, trunk: Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            remote: remote.unwrap_or(defaults.remote),
            trunk: trunk.unwrap_or(defaults.trunk),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_name("remote", &self.remote)?;
        validate_name("trunk", &self.trunk)?;
        if self.remote.starts_with('-') {
            return Err(StackSyncError::config(format!(
                "Remote name must not start with '-': {}",
                self.remote
            )));
        }
        Ok(())
    }
}

/// Check a branch base before it is used to build ref names
pub fn validate_branch_base(branch_base: &str) -> Result<()> {
    validate_name("branch base", branch_base)?;
    if branch_base.starts_with('-') {
        return Err(StackSyncError::config(format!(
            "Branch base must not start with '-': {}",
            branch_base
        )));
    }
    Ok(())
}

fn validate_name(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StackSyncError::config(format!("{what} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(StackSyncError::config(format!(
            "{what} must not contain whitespace: '{value}'"
        )));
    }
    Ok(())
}
