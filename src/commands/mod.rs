//! Command implementations
//!
//! Commands are `impl Viewer` blocks, split the same way as the CLI:
//!
//! - `plumbing`: machine-readable output (raw diff rows)
//! - `porcelain`: human-facing views (rendered diff, statistics, explain payload)

pub mod plumbing;
pub mod porcelain;
