//! Porcelain commands (human-facing views)
//!
//! ## Commands
//!
//! - `diff`: Render two documents as a split or unified diff
//! - `stat`: Show addition and deletion counts
//! - `explain`: Print the explain-diff payload for the text-generation service

pub mod diff;
pub mod explain;
pub mod stat;
