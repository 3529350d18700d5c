//! The repository aggregate and its mutable-by-value areas
//!
//! - `repository`: the aggregate every operation receives and returns
//! - `staging`: accumulated pending changes awaiting a commit
//! - `working`: the map of current uncommitted file contents

pub mod repository;
pub mod staging;
pub mod working;
