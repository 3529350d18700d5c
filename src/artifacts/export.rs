//! Repository export and import
//!
//! Serializes the durable parts of a repository (identifier, branches,
//! commits, tags, remote configuration and optionally the working
//! directory) to pretty-printed JSON, and reconstitutes a repository
//! from such a payload. Serialization failures are converted into typed
//! errors rather than propagated as panics.

use crate::areas::repository::Repository;
use crate::areas::staging::StagingArea;
use crate::areas::working::WorkingDirectory;
use crate::artifacts::branch::{Branch, BranchName};
use crate::artifacts::commit::Commit;
use crate::artifacts::ident::RepositoryId;
use crate::artifacts::tag::Tag;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, new)]
pub struct ExportOpts {
    pub include_working_directory: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExportEnvelope {
    repository_id: RepositoryId,
    exported_at: DateTime<Utc>,
    branches: Vec<Branch>,
    commits: Vec<Commit>,
    tags: Vec<Tag>,
    remote_config: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_directory: Option<WorkingDirectory>,
}

impl Repository {
    /// Serialize the repository to a structured text payload
    pub fn export(&self, opts: &ExportOpts) -> Result<String> {
        let envelope = ExportEnvelope {
            repository_id: self.id().clone(),
            exported_at: Utc::now(),
            branches: self.branches().to_vec(),
            commits: self.commits().to_vec(),
            tags: self.tags().to_vec(),
            remote_config: self.remote_config().cloned(),
            working_directory: opts
                .include_working_directory
                .then(|| self.working_directory().clone()),
        };

        debug!(repository = %envelope.repository_id, "exporting repository");

        serde_json::to_string_pretty(&envelope).map_err(|err| Error::ExportFailed(err.to_string()))
    }

    /// Reconstitute a repository from an export payload
    ///
    /// The current branch becomes the first exported branch (the most
    /// recently created one), or a fresh `main` when the payload carries
    /// no branches. The staging area and merge conflicts start empty:
    /// neither is part of an export.
    pub fn import(path: impl Into<String>, payload: &str) -> Result<Repository> {
        let envelope: ExportEnvelope =
            serde_json::from_str(payload).map_err(|err| Error::ImportFailed(err.to_string()))?;

        let mut branches = envelope.branches;
        if branches.is_empty() {
            branches.push(Branch::new(BranchName::main(), Utc::now(), None));
        }
        let current_branch = branches[0].name.clone();

        debug!(repository = %envelope.repository_id, "importing repository");

        Ok(Repository {
            path: path.into(),
            id: envelope.repository_id,
            current_branch,
            branches,
            commits: envelope.commits,
            staging_area: StagingArea::default(),
            working_directory: envelope.working_directory.unwrap_or_default(),
            remote_config: envelope.remote_config,
            merge_conflicts: Vec::new(),
            tags: envelope.tags,
        })
    }
}
