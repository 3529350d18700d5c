//! Terminal formatting of history and diff output
//!
//! Pure string builders: callers decide where the text goes. Color is
//! applied to identifiers and markers only, so plain substrings (paths,
//! messages) survive assertions and grepping; `colored` itself disables
//! escape codes when stdout is not a terminal.

use crate::artifacts::change::ChangeType;
use crate::artifacts::commit::Commit;
use crate::artifacts::diff::DiffEntry;
use colored::Colorize;

/// One line per commit: short id, branch decoration, first message line
pub fn format_history(commits: &[Commit]) -> String {
    commits
        .iter()
        .map(|commit| {
            format!(
                "{} {} {}",
                commit.commit_id().to_short_id().yellow(),
                format!("({})", commit.branch()).green(),
                commit.short_message(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One block per entry: a marker line, then before/after content when present
pub fn format_diff(entries: &[DiffEntry]) -> String {
    let mut lines = Vec::new();

    for entry in entries {
        let marker = match entry.change_type {
            ChangeType::Create => "+".green(),
            ChangeType::Delete => "-".red(),
            ChangeType::Modify => "~".cyan(),
        };
        lines.push(format!("{marker} {}", entry.file_path));

        if let Some(before) = &entry.before {
            lines.push(format!("  {} {before}", "-".red()));
        }
        if let Some(after) = &entry.after {
            lines.push(format!("  {} {after}", "+".green()));
        }
    }

    lines.join("\n")
}
