//! Commit history queries
//!
//! Pure read operations over the commit list: filter by branch
//! (defaulting to the current one) and optionally by author, sorted
//! descending by timestamp, optionally truncated.

use crate::areas::repository::Repository;
use crate::artifacts::commit::Commit;
use crate::errors::Result;
use derive_new::new;

#[derive(Debug, Clone, Default, new)]
pub struct HistoryFilter {
    pub author: Option<String>,
    pub limit: Option<usize>,
}

impl Repository {
    /// Query commit history for a branch
    ///
    /// `branch` defaults to the current branch; an explicit unknown
    /// branch fails like every other branch lookup.
    pub fn history(&self, branch: Option<&str>, filter: &HistoryFilter) -> Result<Vec<Commit>> {
        let branch = match branch {
            Some(name) => self.require_branch(name)?,
            None => self.current_branch().clone(),
        };

        let mut commits: Vec<Commit> = self
            .commits()
            .iter()
            .filter(|commit| commit.branch() == &branch)
            .filter(|commit| {
                filter
                    .author
                    .as_deref()
                    .is_none_or(|author| commit.author() == author)
            })
            .cloned()
            .collect();

        commits.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        if let Some(limit) = filter.limit {
            commits.truncate(limit);
        }

        Ok(commits)
    }
}
