//! Working directory model
//!
//! A sorted map of file path to current uncommitted content. Purely
//! in-memory: no file system is consulted.

use crate::artifacts::change::{Change, ChangeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingDirectory(BTreeMap<String, String>);

impl WorkingDirectory {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn write(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.0.insert(path.into(), content.into());
    }

    pub fn remove(&mut self, path: &str) {
        self.0.remove(path);
    }

    /// Apply one change: create/modify set the path, delete removes it
    pub fn apply(&mut self, change: &Change) {
        match change.change_type {
            ChangeType::Create | ChangeType::Modify => {
                let content = change.content.clone().unwrap_or_default();
                self.0.insert(change.file_path.clone(), content);
            }
            ChangeType::Delete => {
                self.0.remove(&change.file_path);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for WorkingDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
