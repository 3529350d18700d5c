//! Tag records and tag creation
//!
//! A tag is an immutable named pointer to one commit. Tag names share the
//! ref-name validation rules with branch names.

use crate::areas::repository::Repository;
use crate::artifacts::branch::validate_ref_name;
use crate::artifacts::ident::CommitId;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Tag {
    pub name: String,
    pub commit_id: CommitId,
    pub created_at: DateTime<Utc>,
}

impl Repository {
    /// Create a tag pointing at an existing commit
    pub fn create_tag(&self, name: &str, commit_id: &str) -> Result<Repository> {
        validate_ref_name(name)?;

        if self.tags.iter().any(|tag| tag.name == name) {
            return Err(Error::TagExists(name.to_string()));
        }

        let commit = self
            .find_commit(commit_id)
            .ok_or_else(|| Error::UnknownCommit(commit_id.to_string()))?;
        let commit_id = commit.commit_id().clone();

        debug!(tag = name, commit = %commit_id, "creating tag");

        let mut next = self.clone();
        next.tags.insert(0, Tag::new(name.to_string(), commit_id, Utc::now()));
        Ok(next)
    }
}
