//! Typed failures for every engine operation
//!
//! All expected domain failures are variants here so that callers can
//! branch on them. The only untyped source of errors is the external
//! VCS collaborator, wrapped in [`Error::RefreshFailed`].

use crate::artifacts::conflict::Conflict;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("commit message cannot be empty")]
    EmptyMessage,
    #[error("commit author cannot be empty")]
    EmptyAuthor,
    #[error("nothing staged for commit")]
    NothingStaged,
    #[error("invalid name: '{0}'")]
    InvalidName(String),
    #[error("branch '{0}' already exists")]
    BranchExists(String),
    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),
    #[error("tag '{0}' already exists")]
    TagExists(String),
    #[error("commit '{0}' does not exist")]
    UnknownCommit(String),
    #[error("repository has no commits")]
    NoCommits,
    #[error("merge would conflict on {} file(s)", .0.len())]
    MergeConflicts(Vec<Conflict>),
    #[error("export failed: {0}")]
    ExportFailed(String),
    #[error("import failed: {0}")]
    ImportFailed(String),
    #[error("failed to refresh from the underlying VCS")]
    RefreshFailed(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
