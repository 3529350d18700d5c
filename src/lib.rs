//! quill — an in-memory versioning engine for textual artifacts
//!
//! Tracks snapshots of prompts/templates through a staging → commit →
//! branch → merge lifecycle without touching an on-disk object store.
//! Every operation is a pure function over the [`Repository`] aggregate:
//! it takes the current value and returns either an updated copy or a
//! typed [`Error`]. Serializing concurrent writers against one logical
//! repository is the caller's responsibility.
//!
//! The only external dependency surface is the [`vcs::RealVcs`]
//! collaborator, used to refresh the in-memory branch/tag lists and
//! working-directory summary from a real source-control tool. Commit,
//! merge, diff and revert are engine-native and never shell out.

pub mod areas;
pub mod artifacts;
pub mod errors;
pub mod vcs;

pub use areas::repository::Repository;
pub use areas::staging::StageSelector;
pub use areas::working::WorkingDirectory;
pub use artifacts::branch::{Branch, BranchName, BranchOpts};
pub use artifacts::change::{Change, ChangeType};
pub use artifacts::commit::{Commit, CommitLink, MergeType};
pub use artifacts::conflict::{
    Conflict, ConflictDetector, HistoryOverlapDetector, PermissiveDetector,
};
pub use artifacts::diff::DiffEntry;
pub use artifacts::export::ExportOpts;
pub use artifacts::history::HistoryFilter;
pub use artifacts::ident::{CommitId, RepositoryId};
pub use artifacts::merge::MergeOpts;
pub use artifacts::tag::Tag;
pub use errors::{Error, Result};
