mod common;

use common::{committed_repository, overlapping_branches, repository};
use pretty_assertions::assert_eq;
use quill::{
    BranchOpts, CommitLink, Error, MergeOpts, MergeType, Repository, StageSelector,
};
use rstest::rstest;

/// Branches touching disjoint file sets
#[rstest]
fn merging_disjoint_branches_creates_a_merge_commit(committed_repository: Repository) {
    let repo = committed_repository
        .create_branch("feat", &BranchOpts::default())
        .unwrap()
        .switch_branch("feat")
        .unwrap()
        .write_file("b.txt", "other file")
        .stage(&StageSelector::Paths(vec!["b.txt".to_string()]))
        .commit("add b", "bob")
        .unwrap()
        .switch_branch("main")
        .unwrap();

    let feat_head = repo
        .latest_commit_on(&quill::BranchName::try_parse("feat").unwrap())
        .unwrap()
        .commit_id()
        .clone();
    let main_head = repo
        .latest_commit_on(repo.current_branch())
        .unwrap()
        .commit_id()
        .clone();

    let merged = repo.merge_branch("feat", &MergeOpts::default()).unwrap();

    assert!(merged.merge_conflicts().is_empty());

    let commit = &merged.commits()[0];
    assert_eq!(commit.message(), "Merge branch 'feat' into 'main'");
    assert!(commit.changes().is_empty());
    match commit.link() {
        CommitLink::Merge { parents, merge_type } => {
            assert_eq!(merge_type, &MergeType::Simple);
            assert_eq!(parents, &vec![main_head, feat_head]);
        }
        other => panic!("expected a merge link, got {other:?}"),
    }
}

#[rstest]
fn overlapping_simple_merge_reports_conflicts_without_failing(
    overlapping_branches: Repository,
) {
    // Scenario: both "main" and "feat" have a commit touching a.txt;
    // merging "feat" from "main" is advisory.
    let commits_before = overlapping_branches.commits().len();

    let merged = overlapping_branches
        .merge_branch("feat", &MergeOpts::default())
        .unwrap();

    assert_eq!(merged.merge_conflicts().len(), 1);
    assert_eq!(merged.merge_conflicts()[0].file_path, "a.txt");
    // no merge commit on conflict
    assert_eq!(merged.commits().len(), commits_before);
}

#[rstest]
fn simple_merge_with_unknown_source_fails(committed_repository: Repository) {
    let result = committed_repository.merge_branch("ghost", &MergeOpts::default());
    assert!(matches!(result, Err(Error::UnknownBranch(name)) if name == "ghost"));
}

#[rstest]
fn directed_merge_ignores_history_overlap(overlapping_branches: Repository) {
    // The directed path's detector is a stub: the same repository that
    // conflicts under merge_branch merges cleanly here without force.
    let advisory = overlapping_branches
        .merge_branch("feat", &MergeOpts::default())
        .unwrap();
    assert!(!advisory.merge_conflicts().is_empty());

    let merged = overlapping_branches
        .merge_branches("feat", "main", &MergeOpts::default())
        .unwrap();
    assert!(merged.merge_conflicts().is_empty());
    assert!(merged.commits()[0].is_merge());
}

#[rstest]
fn directed_merge_concatenates_latest_changes_onto_a_fresh_working_directory(
    overlapping_branches: Repository,
) {
    let merged = overlapping_branches
        .merge_branches("feat", "main", &MergeOpts::default())
        .unwrap();

    assert_eq!(merged.current_branch().as_ref(), "main");

    // latest feat commit and latest main commit each changed a.txt once;
    // the change lists concatenate without deduplication
    let commit = &merged.commits()[0];
    assert_eq!(commit.changes().len(), 2);
    match commit.link() {
        CommitLink::Merge { parents, merge_type } => {
            assert_eq!(merge_type, &MergeType::Directed);
            assert_eq!(parents.len(), 2);
        }
        other => panic!("expected a merge link, got {other:?}"),
    }

    // fresh map rebuilt from the concatenated changes only
    assert_eq!(merged.working_directory().len(), 1);
    // main's change applies last and wins
    assert_eq!(merged.working_directory().get("a.txt"), Some("hi"));
}

#[rstest]
fn directed_merge_with_unknown_branch_fails(committed_repository: Repository) {
    assert!(matches!(
        committed_repository.merge_branches("ghost", "main", &MergeOpts::default()),
        Err(Error::UnknownBranch(_))
    ));
    assert!(matches!(
        committed_repository.merge_branches("main", "ghost", &MergeOpts::default()),
        Err(Error::UnknownBranch(_))
    ));
}

#[rstest]
fn directed_merge_with_blocking_detector_fails_unless_forced(
    overlapping_branches: Repository,
) {
    use quill::HistoryOverlapDetector;

    let result = overlapping_branches.merge_branches_with(
        &HistoryOverlapDetector,
        "feat",
        "main",
        &MergeOpts::default(),
    );
    match result {
        Err(Error::MergeConflicts(conflicts)) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].file_path, "a.txt");
        }
        other => panic!("expected merge conflicts, got {other:?}"),
    }

    let forced = overlapping_branches
        .merge_branches_with(
            &HistoryOverlapDetector,
            "feat",
            "main",
            &MergeOpts::new(true, None),
        )
        .unwrap();
    assert!(forced.commits()[0].is_merge());
    assert!(forced.merge_conflicts().is_empty());
}

#[rstest]
fn successful_merge_clears_stale_conflicts(overlapping_branches: Repository) {
    let with_conflicts = overlapping_branches
        .merge_branch("feat", &MergeOpts::default())
        .unwrap();
    assert!(!with_conflicts.merge_conflicts().is_empty());

    let merged = with_conflicts
        .merge_branches("feat", "main", &MergeOpts::default())
        .unwrap();
    assert!(merged.merge_conflicts().is_empty());
}

#[rstest]
fn merging_branches_without_commits_produces_an_empty_merge(repository: Repository) {
    let repo = repository
        .create_branch("feat", &BranchOpts::default())
        .unwrap();

    let merged = repo.merge_branches("feat", "main", &MergeOpts::default()).unwrap();

    let commit = &merged.commits()[0];
    assert!(commit.changes().is_empty());
    match commit.link() {
        CommitLink::Merge { parents, .. } => assert!(parents.is_empty()),
        other => panic!("expected a merge link, got {other:?}"),
    }
}
