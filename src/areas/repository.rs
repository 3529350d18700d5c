//! The repository aggregate
//!
//! One value holding all versioning state for an artifact tree. Every
//! operation is copy-on-write: it clones the aggregate, mutates the
//! clone and returns it, so callers can keep any number of consistent
//! prior snapshots. The engine never persists this value and never
//! mutates it in place.

use crate::areas::staging::StagingArea;
use crate::areas::working::WorkingDirectory;
use crate::artifacts::branch::{Branch, BranchName};
use crate::artifacts::commit::Commit;
use crate::artifacts::conflict::Conflict;
use crate::artifacts::ident::RepositoryId;
use crate::artifacts::tag::Tag;
use crate::errors::{Error, Result};
use chrono::Utc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub(crate) path: String,
    pub(crate) id: RepositoryId,
    pub(crate) current_branch: BranchName,
    pub(crate) branches: Vec<Branch>,
    /// Most-recent-first
    pub(crate) commits: Vec<Commit>,
    pub(crate) staging_area: StagingArea,
    pub(crate) working_directory: WorkingDirectory,
    pub(crate) remote_config: Option<serde_json::Value>,
    pub(crate) merge_conflicts: Vec<Conflict>,
    pub(crate) tags: Vec<Tag>,
}

impl Repository {
    /// Initialize a fresh repository with a single `main` branch
    pub fn init(path: impl Into<String>) -> Self {
        let path = path.into();
        let id = RepositoryId::generate();

        debug!(%id, %path, "initialized repository");

        Repository {
            path,
            id,
            current_branch: BranchName::main(),
            branches: vec![Branch::new(BranchName::main(), Utc::now(), None)],
            commits: Vec::new(),
            staging_area: StagingArea::default(),
            working_directory: WorkingDirectory::default(),
            remote_config: None,
            merge_conflicts: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn id(&self) -> &RepositoryId {
        &self.id
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn staging_area(&self) -> &StagingArea {
        &self.staging_area
    }

    pub fn working_directory(&self) -> &WorkingDirectory {
        &self.working_directory
    }

    pub fn remote_config(&self) -> Option<&serde_json::Value> {
        self.remote_config.as_ref()
    }

    pub fn merge_conflicts(&self) -> &[Conflict] {
        &self.merge_conflicts
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Set one working-directory file
    pub fn write_file(&self, path: impl Into<String>, content: impl Into<String>) -> Repository {
        let mut next = self.clone();
        next.working_directory.write(path, content);
        next
    }

    /// Remove one working-directory file
    pub fn remove_file(&self, path: &str) -> Repository {
        let mut next = self.clone();
        next.working_directory.remove(path);
        next
    }

    /// Replace the opaque remote configuration
    pub fn with_remote_config(&self, remote_config: Option<serde_json::Value>) -> Repository {
        let mut next = self.clone();
        next.remote_config = remote_config;
        next
    }

    /// Look up a branch by name
    pub(crate) fn require_branch(&self, name: &str) -> Result<BranchName> {
        self.branches
            .iter()
            .find(|branch| branch.name.as_ref() == name)
            .map(|branch| branch.name.clone())
            .ok_or_else(|| Error::UnknownBranch(name.to_string()))
    }

    /// Find a commit by its identifier
    pub fn find_commit(&self, commit_id: &str) -> Option<&Commit> {
        self.commits
            .iter()
            .find(|commit| commit.commit_id().as_ref() == commit_id)
    }

    /// The most recent commit created on `branch`, if any
    pub fn latest_commit_on(&self, branch: &BranchName) -> Option<&Commit> {
        self.commits.iter().find(|commit| commit.branch() == branch)
    }

    /// The most recent commit on the current branch
    ///
    /// Falls back to the newest commit overall when the current branch
    /// has none but the repository does. Fails only on an empty commit
    /// list.
    pub fn head_commit(&self) -> Result<&Commit> {
        if self.commits.is_empty() {
            return Err(Error::NoCommits);
        }

        Ok(self
            .latest_commit_on(&self.current_branch)
            .unwrap_or(&self.commits[0]))
    }
}
