//! Staging area and the stage/commit workflow
//!
//! The staging area is an ordered list of pending changes. Staging
//! appends (repeated staging accumulates); a successful commit consumes
//! the whole list atomically.

use crate::areas::repository::Repository;
use crate::artifacts::change::Change;
use crate::artifacts::commit::{Commit, CommitLink};
use crate::artifacts::ident::CommitId;
use crate::errors::{Error, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which working-directory entries to stage
#[derive(Debug, Clone)]
pub enum StageSelector {
    /// Every working-directory entry
    All,
    /// Only the listed paths; paths absent from the working directory
    /// are silently skipped
    Paths(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagingArea(Vec<Change>);

impl StagingArea {
    pub fn append(&mut self, changes: impl IntoIterator<Item = Change>) {
        self.0.extend(changes);
    }

    /// Move all staged changes out, leaving the area empty
    pub fn take(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.0)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn changes(&self) -> &[Change] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Repository {
    /// Stage working-directory entries as modification changes
    ///
    /// Staged changes append to whatever is already staged.
    pub fn stage(&self, selector: &StageSelector) -> Repository {
        let staged: Vec<Change> = match selector {
            StageSelector::All => self
                .working_directory
                .iter()
                .map(|(path, content)| Change::modify(path, content, None))
                .collect(),
            StageSelector::Paths(paths) => paths
                .iter()
                .filter_map(|path| {
                    self.working_directory
                        .get(path)
                        .map(|content| Change::modify(path, content, None))
                })
                .collect(),
        };

        debug!(staged = staged.len(), total = self.staging_area.len() + staged.len(), "staging changes");

        let mut next = self.clone();
        next.staging_area.append(staged);
        next
    }

    /// Discard all staged changes without committing
    pub fn unstage_all(&self) -> Repository {
        let mut next = self.clone();
        next.staging_area.clear();
        next
    }

    /// Commit the entire staging area as a new regular commit
    ///
    /// The staged change list is accepted as-is: duplicate paths or
    /// inconsistent change types are not validated here.
    pub fn commit(&self, message: &str, author: &str) -> Result<Repository> {
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }
        if author.is_empty() {
            return Err(Error::EmptyAuthor);
        }
        if self.staging_area.is_empty() {
            return Err(Error::NothingStaged);
        }

        let mut next = self.clone();
        let changes = next.staging_area.take();
        let commit = Commit::new(
            CommitId::generate(),
            message.to_string(),
            author.to_string(),
            Utc::now(),
            self.current_branch.clone(),
            changes,
            CommitLink::None,
        );

        debug!(commit = %commit.commit_id(), branch = %self.current_branch, "created commit");

        next.commits.insert(0, commit);
        Ok(next)
    }
}
