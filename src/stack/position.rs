use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix of the branch that marks the top of a stack (`{base}-MASTER`)
pub const SENTINEL_SUFFIX: &str = "MASTER";

/// Logical index of one unit of work within a stack
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StackPosition(u32);

impl StackPosition {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the sentinel branch for a stack
pub fn sentinel_branch(branch_base: &str) -> String {
    format!("{branch_base}-{SENTINEL_SUFFIX}")
}

/// Parse the `[<N>/n]` trailer that opens a stacked commit subject.
///
/// The subject must start with the trailer; whatever follows the closing
/// bracket is ignored.
pub fn parse_commit_trailer(subject: &str) -> Option<StackPosition> {
    let rest = subject.strip_prefix('[')?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    if !tail.starts_with("/n]") {
        return None;
    }
    parse_digits(digits)
}

/// Parse a per-position branch name of the form `{base}-<N>` or
/// `{base}-<N>-<anything>`.
pub fn parse_branch_position(name: &str, branch_base: &str) -> Option<StackPosition> {
    let rest = name.strip_prefix(branch_base)?.strip_prefix('-')?;
    // Anything after the second dash is a free-form label
    let digits = rest.split_once('-').map_or(rest, |(digits, _)| digits);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_digits(digits)
}

fn parse_digits(digits: &str) -> Option<StackPosition> {
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok().map(StackPosition)
}
