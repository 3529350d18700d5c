//! Merge engine
//!
//! Two entry points with different guarantees:
//!
//! - [`Repository::merge_branch`] merges a source branch into the current
//!   one. Conflict detection is advisory: on overlap the call still
//!   succeeds and the conflicts are left on the returned repository for
//!   the caller to inspect.
//! - [`Repository::merge_branches`] switches to an explicit target branch
//!   and merges the latest commits of both sides. Detection is blocking:
//!   conflicts fail the call unless `opts.force` is set.
//!
//! Each entry point has a fixed default detector (see the `conflict`
//! module) and a `*_with` form accepting any [`ConflictDetector`].

use crate::areas::repository::Repository;
use crate::areas::working::WorkingDirectory;
use crate::artifacts::change::Change;
use crate::artifacts::commit::{Commit, CommitLink, MergeType};
use crate::artifacts::conflict::{ConflictDetector, HistoryOverlapDetector, PermissiveDetector};
use crate::artifacts::ident::CommitId;
use crate::errors::{Error, Result};
use chrono::Utc;
use derive_new::new;
use tracing::debug;

const MERGE_AUTHOR: &str = "system";

/// Options shared by both merge entry points
#[derive(Debug, Clone, Default, new)]
pub struct MergeOpts {
    /// Directed merge only: proceed despite detected conflicts
    pub force: bool,
    /// Author recorded on the merge commit; defaults to "system"
    pub author: Option<String>,
}

impl Repository {
    /// Merge `source` into the current branch (advisory conflicts)
    pub fn merge_branch(&self, source: &str, opts: &MergeOpts) -> Result<Repository> {
        self.merge_branch_with(&HistoryOverlapDetector, source, opts)
    }

    /// Simple merge with an injected conflict detector
    ///
    /// On overlap the call still succeeds: the conflicts are stored on the
    /// returned repository and no merge commit is created. Callers must
    /// inspect `merge_conflicts`.
    pub fn merge_branch_with(
        &self,
        detector: &dyn ConflictDetector,
        source: &str,
        opts: &MergeOpts,
    ) -> Result<Repository> {
        let source = self.require_branch(source)?;
        let target = self.current_branch().clone();

        let conflicts = detector.detect(self, &source, &target);
        let mut next = self.clone();

        if !conflicts.is_empty() {
            debug!(
                source = %source,
                target = %target,
                conflicts = conflicts.len(),
                "simple merge found conflicts"
            );
            next.merge_conflicts = conflicts;
            return Ok(next);
        }

        let parents: Vec<CommitId> = [
            self.latest_commit_on(&target),
            self.latest_commit_on(&source),
        ]
        .into_iter()
        .flatten()
        .map(|commit| commit.commit_id().clone())
        .collect();

        let commit = Commit::new(
            CommitId::generate(),
            format!("Merge branch '{source}' into '{target}'"),
            opts.author.clone().unwrap_or_else(|| MERGE_AUTHOR.to_string()),
            Utc::now(),
            target.clone(),
            Vec::new(),
            CommitLink::Merge {
                parents,
                merge_type: MergeType::Simple,
            },
        );

        debug!(source = %source, target = %target, commit = %commit.commit_id(), "simple merge");

        next.commits.insert(0, commit);
        next.merge_conflicts.clear();
        Ok(next)
    }

    /// Merge `source` into an explicit `target` branch (blocking conflicts)
    pub fn merge_branches(
        &self,
        source: &str,
        target: &str,
        opts: &MergeOpts,
    ) -> Result<Repository> {
        self.merge_branches_with(&PermissiveDetector, source, target, opts)
    }

    /// Directed merge with an injected conflict detector
    ///
    /// Switches the current branch to `target`. The change lists of the
    /// latest commit on each side are concatenated without deduplication
    /// and applied to a fresh working directory. Conflicts fail the call
    /// with [`Error::MergeConflicts`] unless `opts.force` is set; the
    /// repository value is left untouched in that case.
    pub fn merge_branches_with(
        &self,
        detector: &dyn ConflictDetector,
        source: &str,
        target: &str,
        opts: &MergeOpts,
    ) -> Result<Repository> {
        let source = self.require_branch(source)?;
        let target = self.require_branch(target)?;

        let conflicts = detector.detect(self, &source, &target);
        if !conflicts.is_empty() && !opts.force {
            return Err(Error::MergeConflicts(conflicts));
        }

        let source_latest = self.latest_commit_on(&source);
        let target_latest = self.latest_commit_on(&target);

        let changes: Vec<Change> = source_latest
            .iter()
            .chain(target_latest.iter())
            .flat_map(|commit| commit.changes().iter().cloned())
            .collect();

        let parents: Vec<CommitId> = [source_latest, target_latest]
            .into_iter()
            .flatten()
            .map(|commit| commit.commit_id().clone())
            .collect();

        let mut working_directory = WorkingDirectory::default();
        for change in &changes {
            working_directory.apply(change);
        }

        let commit = Commit::new(
            CommitId::generate(),
            format!("Merge branch '{source}' into '{target}'"),
            opts.author.clone().unwrap_or_else(|| MERGE_AUTHOR.to_string()),
            Utc::now(),
            target.clone(),
            changes,
            CommitLink::Merge {
                parents,
                merge_type: MergeType::Directed,
            },
        );

        debug!(
            source = %source,
            target = %target,
            commit = %commit.commit_id(),
            forced = opts.force,
            "directed merge"
        );

        let mut next = self.clone();
        next.current_branch = target;
        next.working_directory = working_directory;
        next.commits.insert(0, commit);
        next.merge_conflicts.clear();
        Ok(next)
    }
}
