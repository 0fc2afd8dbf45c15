//! Positional line diffing for a code question-answering client.
//!
//! The engine turns two documents into an ordered list of rows, each one
//! unchanged, added or deleted, ready to lay out as a split or unified view.
//!
//! ```
//! use linediff::artifacts::diff::diff_line::DiffLine;
//! use linediff::artifacts::diff::positional::diff_lines;
//!
//! let rows = diff_lines(&["def f():", "    pass"], &["def f():", "    return 1"]);
//! assert_eq!(
//!     rows,
//!     vec![
//!         DiffLine::unchanged("def f():", 1, 1),
//!         DiffLine::deleted("    pass", 2),
//!         DiffLine::added("    return 1", 2),
//!     ]
//! );
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
