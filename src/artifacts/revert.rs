//! Revert engine
//!
//! Computes the inverse of a commit's change list, records it as a new
//! commit linked to the reverted one, and applies it to the working
//! directory.

use crate::areas::repository::Repository;
use crate::artifacts::change::{Change, ChangeType};
use crate::artifacts::commit::{Commit, CommitLink};
use crate::artifacts::ident::CommitId;
use crate::errors::{Error, Result};
use chrono::Utc;
use tracing::{debug, warn};

/// Compute the inverse of one change
///
/// Create and delete swap; a modification restores `previous_content`.
/// When the original change carried no previous content the restored
/// content falls back to the empty string, which loses fidelity — the
/// fallback is logged.
fn inverse(change: &Change) -> Change {
    match change.change_type {
        ChangeType::Create => Change::delete(&change.file_path, change.content.clone()),
        ChangeType::Delete => {
            let restored = change.previous_content.clone().unwrap_or_else(|| {
                warn!(path = %change.file_path, "no previous content recorded, restoring empty file");
                String::new()
            });
            Change::create(&change.file_path, restored)
        }
        ChangeType::Modify => {
            let restored = change.previous_content.clone().unwrap_or_else(|| {
                warn!(path = %change.file_path, "no previous content recorded, restoring empty file");
                String::new()
            });
            Change::modify(&change.file_path, restored, change.content.clone())
        }
    }
}

impl Repository {
    /// Create a commit undoing `commit_id` and apply it to the working directory
    pub fn revert(&self, commit_id: &str, author: &str) -> Result<Repository> {
        let reverted = self
            .find_commit(commit_id)
            .ok_or_else(|| Error::UnknownCommit(commit_id.to_string()))?;

        let changes: Vec<Change> = reverted.changes().iter().map(inverse).collect();
        let parents: Vec<CommitId> = self
            .latest_commit_on(self.current_branch())
            .map(|commit| commit.commit_id().clone())
            .into_iter()
            .collect();

        let commit = Commit::new(
            CommitId::generate(),
            format!("Revert \"{}\"", reverted.short_message()),
            author.to_string(),
            Utc::now(),
            self.current_branch().clone(),
            changes.clone(),
            CommitLink::Revert {
                reverts: reverted.commit_id().clone(),
                parents,
            },
        );

        debug!(reverts = commit_id, commit = %commit.commit_id(), "reverting commit");

        let mut next = self.clone();
        for change in &changes {
            next.working_directory.apply(change);
        }
        next.commits.insert(0, commit);
        Ok(next)
    }
}
