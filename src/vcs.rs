//! External "real VCS" collaborator
//!
//! The engine's only dependency surface on the outside world. A
//! [`RealVcs`] implementation typically shells out to a source-control
//! executable for the repository's path; its failures are inherently
//! untyped, so the trait speaks `anyhow` and the engine wraps any
//! failure into [`Error::RefreshFailed`](crate::Error::RefreshFailed).
//!
//! The engine only ever uses the collaborator to refresh its in-memory
//! branch/tag lists and working-directory summary after an explicit
//! "stage all and refresh" call. Commit, merge, diff and revert are
//! engine-native.

use crate::areas::repository::Repository;
use crate::artifacts::branch::{Branch, BranchName};
use crate::artifacts::tag::Tag;
use crate::errors::{Error, Result};
use chrono::Utc;
use derive_new::new;
use tracing::{debug, warn};

/// Snapshot of the external tool's view of a working tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct VcsStatus {
    pub current_branch: String,
    pub modified_files: Vec<String>,
    pub clean: bool,
    pub has_staged_changes: bool,
}

/// The four operations the engine consumes from a real VCS
pub trait RealVcs {
    fn stage_all_changes(&self, path: &str) -> anyhow::Result<String>;
    fn status(&self, path: &str) -> anyhow::Result<VcsStatus>;
    fn list_branches(&self, path: &str) -> anyhow::Result<Vec<String>>;
    fn list_tags(&self, path: &str) -> anyhow::Result<Vec<String>>;
}

impl Repository {
    /// Stage everything in the external tool, then refresh the in-memory view
    ///
    /// Non-destructive on failure: any collaborator error is returned as
    /// [`Error::RefreshFailed`] and the caller keeps the prior value. On
    /// success, branch names the engine doesn't know are added without
    /// lineage, unknown tag names are attached to the head commit
    /// (skipped when there are no commits to point at), and modified
    /// files absent from the working directory are added with empty
    /// content as a summary placeholder.
    pub fn stage_all_and_refresh(&self, vcs: &dyn RealVcs) -> Result<Repository> {
        let (staged, status, branches, tags) = (|| {
            let staged = vcs.stage_all_changes(&self.path)?;
            let status = vcs.status(&self.path)?;
            let branches = vcs.list_branches(&self.path)?;
            let tags = vcs.list_tags(&self.path)?;
            anyhow::Ok((staged, status, branches, tags))
        })()
        .map_err(Error::RefreshFailed)?;

        debug!(path = %self.path, staged = %staged, clean = status.clean, "refreshed from external VCS");

        let mut next = self.clone();

        for name in branches {
            if next.branches.iter().any(|branch| branch.name.as_ref() == name) {
                continue;
            }
            match BranchName::try_parse(&name) {
                Ok(name) => next.branches.insert(0, Branch::new(name, Utc::now(), None)),
                Err(_) => warn!(branch = %name, "skipping unparsable branch name"),
            }
        }

        let head = next.head_commit().ok().map(|commit| commit.commit_id().clone());
        for name in tags {
            if next.tags.iter().any(|tag| tag.name == name) {
                continue;
            }
            match &head {
                Some(commit_id) => {
                    next.tags.insert(0, Tag::new(name, commit_id.clone(), Utc::now()));
                }
                None => warn!(tag = %name, "no commits to attach external tag to"),
            }
        }

        for path in status.modified_files {
            if !next.working_directory.contains(&path) {
                next.working_directory.write(path, String::new());
            }
        }

        Ok(next)
    }
}
