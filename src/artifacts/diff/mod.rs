//! Line diffing
//!
//! - `diff_line`: the rendered row type (unchanged, added, deleted)
//! - `positional`: the positional line-pairing algorithm and line splitting
//! - `diff_stats`: addition/deletion counts for display
//! - `hunk`: grouping of changed rows with surrounding context
//! - `diff_target`: one side of a diff loaded from a file, text, or nothing
//!
//! The algorithm pairs lines by position only. It never searches ahead for a
//! realignment point, so its output is not a minimal edit script.

pub mod diff_line;
pub mod diff_stats;
pub mod diff_target;
pub mod hunk;
pub mod positional;
