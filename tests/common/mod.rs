#![allow(dead_code)]

use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::{Word, Words};
use quill::{BranchOpts, Repository, StageSelector};
use rstest::fixture;

#[fixture]
pub fn repository() -> Repository {
    Repository::init("/tmp/prompt-repo")
}

/// Repository with one commit of `a.txt` on `main`
#[fixture]
pub fn committed_repository(repository: Repository) -> Repository {
    repository
        .write_file("a.txt", "hi")
        .stage(&StageSelector::All)
        .commit("init", "alice")
        .expect("initial commit failed")
}

/// Repository where both `main` and `feat` have a commit touching `a.txt`
#[fixture]
pub fn overlapping_branches(committed_repository: Repository) -> Repository {
    committed_repository
        .create_branch("feat", &BranchOpts::default())
        .expect("branch creation failed")
        .switch_branch("feat")
        .expect("branch switch failed")
        .write_file("a.txt", "hi from feat")
        .stage(&StageSelector::All)
        .commit("feat change", "bob")
        .expect("feature commit failed")
        .switch_branch("main")
        .expect("branch switch failed")
}

pub fn random_author() -> String {
    FreeEmail().fake::<String>()
}

pub fn random_message() -> String {
    Words(3..8).fake::<Vec<String>>().join(" ")
}

pub fn random_file() -> (String, String) {
    let name = format!("{}.txt", Word().fake::<String>());
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    (name, content)
}
