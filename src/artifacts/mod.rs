//! Versioning value types and algorithms
//!
//! This module contains the engine's building blocks:
//!
//! - `ident`: opaque collision-resistant identifiers
//! - `change`: file change records (create/modify/delete)
//! - `branch`: branch records and name validation
//! - `commit`: immutable branch-tagged snapshots
//! - `tag`: named pointers to commits
//! - `conflict`: conflict records and detection strategies
//! - `merge`: the two merge entry points
//! - `diff`: change-set computation between references
//! - `revert`: inverse-change computation
//! - `history`: commit history queries
//! - `export`: repository export/import
//! - `render`: terminal formatting of history and diff output

pub mod branch;
pub mod change;
pub mod commit;
pub mod conflict;
pub mod diff;
pub mod export;
pub mod history;
pub mod ident;
pub mod merge;
pub mod render;
pub mod revert;
pub mod tag;
