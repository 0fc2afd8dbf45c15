//! Plumbing commands
//!
//! - `rows`: Dump the diff rows in a tab-separated or JSON form for scripts

pub mod rows;
