//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, display settings)
//! - `diff`: Line diff rows, the positional algorithm, statistics and hunks
//! - `explain`: Payload for the explain-diff action

pub mod core;
pub mod diff;
pub mod explain;
