//! Merge conflict records and detection strategies
//!
//! The engine carries two detection strategies with deliberately
//! different behavior, one per merge entry point:
//!
//! - [`HistoryOverlapDetector`] flags every file path touched by commits
//!   on both branches. Used by the advisory simple merge.
//! - [`PermissiveDetector`] never flags anything. Used by the directed
//!   merge, which historically relied on `force` semantics instead of
//!   detection.
//!
//! Both merge entry points accept any [`ConflictDetector`] via their
//! `*_with` forms; the defaults preserve the observed behavior of each
//! path.

use crate::areas::repository::Repository;
use crate::artifacts::branch::BranchName;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One file path modified on both sides of a merge
///
/// The content fields are descriptive, not byte content. Conflicts are
/// transient: they live on the repository until the next merge attempt
/// clears or replaces them, and are never part of commit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Conflict {
    pub file_path: String,
    pub current_content: String,
    pub incoming_content: String,
}

/// Strategy for finding conflicts between two branches' commit sets
pub trait ConflictDetector {
    fn detect(
        &self,
        repository: &Repository,
        source: &BranchName,
        target: &BranchName,
    ) -> Vec<Conflict>;
}

/// Flags the intersection of file paths touched by any commit on each branch
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryOverlapDetector;

impl HistoryOverlapDetector {
    fn touched_paths<'a>(repository: &'a Repository, branch: &BranchName) -> BTreeSet<&'a str> {
        repository
            .commits()
            .iter()
            .filter(|commit| commit.branch() == branch)
            .flat_map(|commit| commit.touched_paths())
            .collect()
    }
}

impl ConflictDetector for HistoryOverlapDetector {
    fn detect(
        &self,
        repository: &Repository,
        source: &BranchName,
        target: &BranchName,
    ) -> Vec<Conflict> {
        let source_paths = Self::touched_paths(repository, source);
        let target_paths = Self::touched_paths(repository, target);

        target_paths
            .intersection(&source_paths)
            .map(|path| {
                Conflict::new(
                    path.to_string(),
                    format!("modified by commits on '{target}'"),
                    format!("modified by commits on '{source}'"),
                )
            })
            .collect()
    }
}

/// Finds no conflicts, ever
///
/// Faithful port of the directed merge's stubbed detector. Whether the
/// stub is intentional (directed merges as forced-only) or unfinished is
/// an open question; the divergence from [`HistoryOverlapDetector`] is
/// asserted by tests rather than papered over.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveDetector;

impl ConflictDetector for PermissiveDetector {
    fn detect(&self, _: &Repository, _: &BranchName, _: &BranchName) -> Vec<Conflict> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::branch::BranchOpts;
    use crate::areas::staging::StageSelector;
    use pretty_assertions::assert_eq;

    fn repo_with_overlap() -> Repository {
        let repo = Repository::init("/tmp/prompts")
            .write_file("a.txt", "one")
            .stage(&StageSelector::All);
        let repo = repo.commit("base", "alice").unwrap();

        let repo = repo.create_branch("feat", &BranchOpts::default()).unwrap();
        let repo = repo.switch_branch("feat").unwrap();
        let repo = repo
            .write_file("a.txt", "two")
            .stage(&StageSelector::All)
            .commit("tweak", "bob")
            .unwrap();
        repo.switch_branch("main").unwrap()
    }

    #[test]
    fn history_overlap_reports_intersection() {
        let repo = repo_with_overlap();
        let source = BranchName::try_parse("feat").unwrap();
        let target = BranchName::try_parse("main").unwrap();

        let conflicts = HistoryOverlapDetector.detect(&repo, &source, &target);
        let paths: Vec<&str> = conflicts.iter().map(|c| c.file_path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt"]);
    }

    #[test]
    fn permissive_detector_never_reports() {
        let repo = repo_with_overlap();
        let source = BranchName::try_parse("feat").unwrap();
        let target = BranchName::try_parse("main").unwrap();

        assert!(PermissiveDetector.detect(&repo, &source, &target).is_empty());
    }
}
