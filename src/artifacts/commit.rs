//! Commit records
//!
//! Commits are immutable, branch-tagged snapshots of the staging area at
//! commit time. Regular commits carry no parent pointers; lineage is
//! implied by the branch tag and list order. Only merge and revert
//! commits link to other commits explicitly, via [`CommitLink`].

use crate::artifacts::branch::BranchName;
use crate::artifacts::change::Change;
use crate::artifacts::ident::CommitId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeType {
    /// Advisory merge on the current branch (`merge_branch`)
    Simple,
    /// Directed merge into an explicit target (`merge_branches`)
    Directed,
}

/// Explicit linkage carried only by merge and revert commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommitLink {
    /// Regular commit: lineage is the branch tag alone
    None,
    Merge {
        parents: Vec<CommitId>,
        merge_type: MergeType,
    },
    Revert {
        reverts: CommitId,
        parents: Vec<CommitId>,
    },
}

/// An immutable snapshot of staged changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    commit_id: CommitId,
    message: String,
    author: String,
    timestamp: DateTime<Utc>,
    branch: BranchName,
    changes: Vec<Change>,
    link: CommitLink,
}

impl Commit {
    pub fn new(
        commit_id: CommitId,
        message: String,
        author: String,
        timestamp: DateTime<Utc>,
        branch: BranchName,
        changes: Vec<Change>,
        link: CommitLink,
    ) -> Self {
        Commit {
            commit_id,
            message,
            author,
            timestamp,
            branch,
            changes,
            link,
        }
    }

    pub fn commit_id(&self) -> &CommitId {
        &self.commit_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for one-line history output.
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The branch this commit was created on
    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn link(&self) -> &CommitLink {
        &self.link
    }

    /// File paths touched by this commit's changes
    pub fn touched_paths(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|change| change.file_path.as_str())
    }

    pub fn is_merge(&self) -> bool {
        matches!(self.link, CommitLink::Merge { .. })
    }

    pub fn is_revert(&self) -> bool {
        matches!(self.link, CommitLink::Revert { .. })
    }
}
