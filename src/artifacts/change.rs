//! File change records
//!
//! A [`Change`] describes one pending or committed mutation of a single
//! file path. Changes accumulate in the staging area, are snapshotted
//! into commits, and are produced in inverse form by the revert engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Create,
    Modify,
    Delete,
}

impl From<&ChangeType> for &str {
    fn from(change_type: &ChangeType) -> Self {
        match change_type {
            ChangeType::Create => "create",
            ChangeType::Modify => "modify",
            ChangeType::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", <&str>::from(self))
    }
}

/// One mutation of one file path
///
/// `content` is present for create/modify; `previous_content` is carried
/// when known so that the revert engine can restore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub file_path: String,
    pub change_type: ChangeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_content: Option<String>,
}

impl Change {
    pub fn create(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Change {
            file_path: file_path.into(),
            change_type: ChangeType::Create,
            content: Some(content.into()),
            previous_content: None,
        }
    }

    pub fn modify(
        file_path: impl Into<String>,
        content: impl Into<String>,
        previous_content: Option<String>,
    ) -> Self {
        Change {
            file_path: file_path.into(),
            change_type: ChangeType::Modify,
            content: Some(content.into()),
            previous_content,
        }
    }

    pub fn delete(file_path: impl Into<String>, previous_content: Option<String>) -> Self {
        Change {
            file_path: file_path.into(),
            change_type: ChangeType::Delete,
            content: None,
            previous_content,
        }
    }
}
