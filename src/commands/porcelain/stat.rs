use crate::areas::viewer::Viewer;
use crate::artifacts::diff::diff_stats::DiffStats;
use crate::artifacts::diff::hunk::{SUMMARY_CONTEXT, hunks};
use crate::artifacts::diff::positional::diff_lines;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Viewer {
    /// Prints the addition and deletion counts. With `summary`, prints a
    /// sentence that also counts hunks of three context lines.
    pub fn stat(
        &self,
        old: &Path,
        new: &Path,
        new_file: bool,
        summary: bool,
    ) -> anyhow::Result<()> {
        let (a, b) = self.load_targets(old, new, new_file)?;
        let rows = diff_lines(a.lines(), b.lines());
        let stats = DiffStats::from_rows(&rows);

        let label = if b.is_present() { new } else { old };
        if summary {
            let hunk_count = hunks(&rows, SUMMARY_CONTEXT).len();
            writeln!(self.writer(), "{}", stats.summary(label, hunk_count))?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{} | {} / {} lines",
            label.display(),
            format!("+{}", stats.additions).green(),
            format!("-{}", stats.deletions).red()
        )?;

        Ok(())
    }
}
