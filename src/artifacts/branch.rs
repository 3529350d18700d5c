//! Branch records and branch operations
//!
//! Branches here are lineage markers, not movable head pointers: each
//! commit is tagged with the branch it was created on, so a branch record
//! only carries its name, creation time and optional source-branch
//! provenance. Switching branches is a logical operation that never
//! touches the working directory or staging area.

use crate::areas::repository::Repository;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Characters and patterns rejected in branch and tag names, after the
/// usual ref-name rules: no control characters or spaces, no globbing or
/// revision-syntax metacharacters, no ".." or leading ".".
pub const INVALID_REF_NAME_REGEX: &str = r"^\.|\.\.|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

pub(crate) const DEFAULT_BRANCH: &str = "main";

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> Result<Self> {
        validate_ref_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub(crate) fn main() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    pub fn is_default_branch(&self) -> bool {
        self.0 == "master" || self.0 == "main"
    }
}

/// Validate a branch or tag name against [`INVALID_REF_NAME_REGEX`]
///
/// Empty names are invalid; so are names containing control characters
/// or revision-syntax metacharacters.
pub(crate) fn validate_ref_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName(name.to_string()));
    }

    let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
        .map_err(|_| Error::InvalidName(name.to_string()))?;

    if re.is_match(name) {
        return Err(Error::InvalidName(name.to_string()));
    }

    Ok(())
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named lineage pointer
///
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Branch {
    pub name: BranchName,
    pub created_at: DateTime<Utc>,
    pub source_branch: Option<BranchName>,
}

/// Options for branch creation
#[derive(Debug, Clone, Default, new)]
pub struct BranchOpts {
    /// Recorded as the new branch's provenance; defaults to the current branch
    pub source_branch: Option<String>,
}

impl Repository {
    /// Create a new branch without switching to it
    ///
    /// The new branch records `opts.source_branch` (or the current branch)
    /// as its provenance and is prepended to the branch list.
    pub fn create_branch(&self, name: &str, opts: &BranchOpts) -> Result<Repository> {
        let name = BranchName::try_parse(name)?;

        if self.branches.iter().any(|branch| branch.name == name) {
            return Err(Error::BranchExists(name.to_string()));
        }

        let source_branch = match &opts.source_branch {
            Some(source) => BranchName::try_parse(source)?,
            None => self.current_branch.clone(),
        };

        debug!(branch = %name, source = %source_branch, "creating branch");

        let mut next = self.clone();
        next.branches
            .insert(0, Branch::new(name, Utc::now(), Some(source_branch)));
        Ok(next)
    }

    /// Switch the current branch
    ///
    /// Logical only: the working directory and staging area are untouched.
    pub fn switch_branch(&self, name: &str) -> Result<Repository> {
        let name = self.require_branch(name)?;

        debug!(from = %self.current_branch, to = %name, "switching branch");

        let mut next = self.clone();
        next.current_branch = name;
        Ok(next)
    }
}
