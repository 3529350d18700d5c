//! Diff engine
//!
//! Computes change sets between two references. References are the
//! literal strings `"WORKING"` (the working directory), `"HEAD"` (the
//! latest commit on the current branch) or a commit identifier.
//!
//! This is deliberately not a byte-level diff. When either side is
//! `WORKING` the result is a snapshot of the working directory as
//! modification entries with no prior content. Between two commits the
//! change set is derived only from the `to` commit's changes — the `from`
//! commit is resolved for existence checking — with placeholder
//! before/after markers.

use crate::areas::repository::Repository;
use crate::artifacts::change::ChangeType;
use crate::artifacts::commit::Commit;
use crate::errors::{Error, Result};
use derive_new::new;
use serde::Serialize;
use tracing::debug;

pub const WORKING_REF: &str = "WORKING";
pub const HEAD_REF: &str = "HEAD";

const BEFORE_MARKER: &str = "<previous>";
const AFTER_MARKER: &str = "<updated>";

/// One entry of a computed change set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct DiffEntry {
    pub file_path: String,
    pub change_type: ChangeType,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Repository {
    /// Compute the change set between two references
    pub fn diff(&self, from_ref: &str, to_ref: &str) -> Result<Vec<DiffEntry>> {
        if from_ref == WORKING_REF || to_ref == WORKING_REF {
            return Ok(self.working_snapshot());
        }

        // `from` is resolved for existence only; the change set comes from `to`.
        let _from = self.resolve_ref(from_ref)?;
        let to = self.resolve_ref(to_ref)?;

        let mut entries: Vec<DiffEntry> = to
            .changes()
            .iter()
            .map(|change| {
                DiffEntry::new(
                    change.file_path.clone(),
                    change.change_type,
                    Some(BEFORE_MARKER.to_string()),
                    Some(AFTER_MARKER.to_string()),
                )
            })
            .collect();
        entries.sort_by(|a, b| b.file_path.cmp(&a.file_path));

        debug!(from = from_ref, to = to_ref, entries = entries.len(), "computed diff");
        Ok(entries)
    }

    /// The working directory as modification entries with no prior content
    fn working_snapshot(&self) -> Vec<DiffEntry> {
        self.working_directory
            .iter()
            .map(|(path, content)| {
                DiffEntry::new(
                    path.clone(),
                    ChangeType::Modify,
                    None,
                    Some(content.clone()),
                )
            })
            .collect()
    }

    fn resolve_ref(&self, reference: &str) -> Result<&Commit> {
        if reference == HEAD_REF {
            return self.head_commit();
        }

        self.find_commit(reference)
            .ok_or_else(|| Error::UnknownCommit(reference.to_string()))
    }
}
