use crate::areas::viewer::Viewer;
use crate::artifacts::core::settings::Layout;
use crate::artifacts::diff::diff_line::DiffLine;
use crate::artifacts::diff::diff_stats::DiffStats;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::hunk::{Hunk, hunks};
use crate::artifacts::diff::positional::{DiffAlgorithm, PositionalDiff};
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

const COLUMN_SEPARATOR: &str = " | ";
const ELLIPSIS: char = '…';

impl Viewer {
    pub fn diff(&self, old: &Path, new: &Path, new_file: bool) -> anyhow::Result<()> {
        let (a, b) = self.load_targets(old, new, new_file)?;
        self.print_diff(&a, &b)
    }

    pub fn print_diff(&self, a: &DiffTarget, b: &DiffTarget) -> anyhow::Result<()> {
        let rows = PositionalDiff::new(a.lines(), b.lines()).diff();
        let stats = DiffStats::from_rows(&rows);
        info!(
            old = %a.file().display(),
            new = %b.file().display(),
            additions = stats.additions,
            deletions = stats.deletions,
            "rendering diff"
        );

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", a.diff_path("a").display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", b.diff_path("b").display()).bold()
        )?;

        let gutter = a.lines().len().max(b.lines().len()).to_string().len();

        match self.settings().context {
            Some(context) => {
                let hunks = hunks(&rows, context);
                debug!(context, hunks = hunks.len(), "collapsed unchanged rows");
                for hunk in hunks {
                    self.print_diff_hunk(&hunk, gutter)?;
                }
            }
            None => self.print_rows(&rows, gutter)?,
        }

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk, gutter: usize) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;
        self.print_rows(hunk.lines(), gutter)
    }

    fn print_rows(&self, rows: &[DiffLine], gutter: usize) -> anyhow::Result<()> {
        for row in rows {
            match self.settings().layout {
                Layout::Unified => self.print_unified_row(row, gutter)?,
                Layout::Split => self.print_split_row(row, gutter)?,
            }
        }

        Ok(())
    }

    fn print_unified_row(&self, row: &DiffLine, gutter: usize) -> anyhow::Result<()> {
        let text = format!(
            "{} {} {}",
            line_number(row.left_line_number(), gutter),
            line_number(row.right_line_number(), gutter),
            row.as_string()
        );
        writeln!(self.writer(), "{}", colorize(row, text))?;

        Ok(())
    }

    fn print_split_row(&self, row: &DiffLine, gutter: usize) -> anyhow::Result<()> {
        let width = self.settings().width;

        let left_content = fit_column(row.left_content().unwrap_or_default(), width);
        let padding = " ".repeat(width - left_content.chars().count());
        let left = format!(
            "{} {left_content}",
            line_number(row.left_line_number(), gutter)
        );
        let right = format!(
            "{} {}",
            line_number(row.right_line_number(), gutter),
            fit_column(row.right_content().unwrap_or_default(), width),
        );

        // padding goes after the escape
        let (left, right) = match row {
            DiffLine::Deleted { .. } => (left.red().to_string(), right),
            DiffLine::Added { .. } => (left, right.green().to_string()),
            DiffLine::Unchanged { .. } => (left, right),
        };

        writeln!(
            self.writer(),
            "{}",
            format!("{left}{padding}{COLUMN_SEPARATOR}{right}").trim_end()
        )?;

        Ok(())
    }
}

fn colorize(row: &DiffLine, text: String) -> String {
    match row {
        DiffLine::Deleted { .. } => text.red().to_string(),
        DiffLine::Added { .. } => text.green().to_string(),
        DiffLine::Unchanged { .. } => text,
    }
}

fn line_number(number: Option<usize>, gutter: usize) -> String {
    match number {
        Some(number) => format!("{number:>gutter$}"),
        None => " ".repeat(gutter),
    }
}

fn fit_column(content: &str, width: usize) -> String {
    if content.chars().count() <= width {
        return content.to_string();
    }

    let mut fitted = content.chars().take(width - 1).collect::<String>();
    fitted.push(ELLIPSIS);
    fitted
}
