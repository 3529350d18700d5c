//! Opaque identifiers for repositories and commits
//!
//! Identifiers are UUID v4 strings. They carry no content hash; their only
//! contract is collision resistance and stability for the lifetime of the
//! value that owns them.
//!
//! ## Format
//!
//! - Full: 36-character hyphenated UUID (e.g. "550e8400-e29b-41d4-a716-446655440000")
//! - Short: first 8 characters, used for display

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SHORT_ID_LENGTH: usize = 8;

/// Unique identifier of one repository value lineage
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Generate a fresh repository identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for RepositoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of one commit
///
/// Globally unique within a repository value and everything exported
/// from it. Implements parsing and abbreviation utilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh commit identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse and validate a commit ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - hyphenated UUID string
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        let parsed = Uuid::parse_str(id)?;
        Ok(Self(parsed.to_string()))
    }

    /// Get abbreviated form of the commit ID
    ///
    /// # Returns
    ///
    /// First 8 characters, used in one-line history output
    pub fn to_short_id(&self) -> String {
        self.0.chars().take(SHORT_ID_LENGTH).collect()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
