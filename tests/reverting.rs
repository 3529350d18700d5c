mod common;

use common::{committed_repository, repository};
use pretty_assertions::assert_eq;
use quill::{ChangeType, CommitLink, Error, Repository, StageSelector};
use rstest::rstest;

#[rstest]
fn reverting_a_commit_undoes_its_changes_in_the_working_directory(
    committed_repository: Repository,
) {
    let target_id = committed_repository.commits()[0].commit_id().to_string();
    assert_eq!(
        committed_repository.working_directory().get("a.txt"),
        Some("hi")
    );

    let reverted = committed_repository.revert(&target_id, "carol").unwrap();

    // the committed change was a modification without previous content,
    // so the revert restores an empty file
    assert_eq!(reverted.working_directory().get("a.txt"), Some(""));
    assert_eq!(reverted.commits().len(), 2);

    let commit = &reverted.commits()[0];
    assert_eq!(commit.author(), "carol");
    assert_eq!(commit.message(), "Revert \"init\"");
    match commit.link() {
        CommitLink::Revert { reverts, parents } => {
            assert_eq!(reverts.as_ref(), target_id);
            assert_eq!(parents.len(), 1);
        }
        other => panic!("expected a revert link, got {other:?}"),
    }
}

#[rstest]
fn reverting_a_revert_restores_the_original_change(repository: Repository) {
    let committed = repository
        .write_file("p.txt", "prompt")
        .stage(&StageSelector::All)
        .commit("create p", "alice")
        .unwrap();
    let first_id = committed.commits()[0].commit_id().to_string();

    let once = committed.revert(&first_id, "alice").unwrap();
    assert_eq!(once.working_directory().get("p.txt"), Some(""));

    let revert_id = once.commits()[0].commit_id().to_string();
    let twice = once.revert(&revert_id, "alice").unwrap();

    let original = &committed.commits()[0].changes()[0];
    let round_tripped = &twice.commits()[0].changes()[0];
    assert_eq!(round_tripped.change_type, original.change_type);
    assert_eq!(round_tripped.file_path, original.file_path);
    assert_eq!(round_tripped.content, original.content);

    // the second revert's change remembers what the first one wrote
    assert_eq!(round_tripped.previous_content.as_deref(), Some(""));
    assert_eq!(twice.working_directory().get("p.txt"), Some("prompt"));
}

#[rstest]
fn revert_commits_land_on_the_current_branch(committed_repository: Repository) {
    let target_id = committed_repository.commits()[0].commit_id().to_string();

    let repo = committed_repository
        .create_branch("feat", &quill::BranchOpts::default())
        .unwrap()
        .switch_branch("feat")
        .unwrap()
        .revert(&target_id, "alice")
        .unwrap();

    assert_eq!(repo.commits()[0].branch().as_ref(), "feat");
    // no commit on "feat" existed yet, so the revert has no parent
    match repo.commits()[0].link() {
        CommitLink::Revert { parents, .. } => assert!(parents.is_empty()),
        other => panic!("expected a revert link, got {other:?}"),
    }
}

#[rstest]
fn reverting_an_unknown_commit_fails(committed_repository: Repository) {
    let result = committed_repository.revert("no-such-commit", "alice");
    assert!(matches!(result, Err(Error::UnknownCommit(id)) if id == "no-such-commit"));
}

#[rstest]
fn inverse_changes_preserve_change_kinds(repository: Repository) {
    let committed = repository
        .write_file("a.txt", "one")
        .write_file("b.txt", "two")
        .stage(&StageSelector::All)
        .commit("two files", "alice")
        .unwrap();

    let reverted = committed
        .revert(committed.commits()[0].commit_id().as_ref(), "alice")
        .unwrap();

    for change in reverted.commits()[0].changes() {
        assert_eq!(change.change_type, ChangeType::Modify);
    }
    assert_eq!(reverted.commits()[0].changes().len(), 2);
}
