//! Payload for the explain-diff action
//!
//! The raw documents and the diff statistics are handed verbatim to an
//! external text-generation service together with the file path. This crate
//! only builds and serializes the payload; it never sends it.

use crate::artifacts::diff::diff_stats::DiffStats;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::positional::{diff_lines, diff_text};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainRequest {
    pub file_path: String,
    pub old_content: String,
    pub new_content: String,
    pub additions: usize,
    pub deletions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<String>,
}

impl ExplainRequest {
    pub fn new(file_path: &Path, old_content: &str, new_content: &str) -> Self {
        let stats = DiffStats::from_rows(&diff_text(old_content, new_content));
        Self::with_stats(file_path, old_content, new_content, stats)
    }

    /// Uses the targets' line sets so absent documents count as empty sequences.
    pub fn from_targets(file_path: &Path, a: &DiffTarget, b: &DiffTarget) -> Self {
        let stats = DiffStats::from_rows(&diff_lines(a.lines(), b.lines()));
        Self::with_stats(file_path, a.content(), b.content(), stats)
    }

    fn with_stats(file_path: &Path, old_content: &str, new_content: &str, stats: DiffStats) -> Self {
        Self {
            file_path: file_path.to_string_lossy().into_owned(),
            old_content: old_content.to_string(),
            new_content: new_content.to_string(),
            additions: stats.additions,
            deletions: stats.deletions,
            repo_id: None,
        }
    }

    /// Ties the request to an ingested repository so the service can pull
    /// surrounding context for it.
    pub fn with_repo_id(mut self, repo_id: Option<String>) -> Self {
        self.repo_id = repo_id;
        self
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::new(self.additions, self.deletions)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize explain request")
    }
}
