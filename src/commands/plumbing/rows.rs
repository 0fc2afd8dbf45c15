use crate::areas::viewer::Viewer;
use crate::artifacts::diff::diff_line::{DiffLine, LineKind};
use crate::artifacts::diff::positional::diff_lines;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Flattened view of a row, matching the shape consumed by the web client.
#[derive(Debug, Serialize)]
struct RowRecord<'r> {
    kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right_line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_content: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right_content: Option<&'r str>,
}

impl<'r> From<&'r DiffLine> for RowRecord<'r> {
    fn from(row: &'r DiffLine) -> Self {
        RowRecord {
            kind: row.kind(),
            left_line_number: row.left_line_number(),
            right_line_number: row.right_line_number(),
            left_content: row.left_content(),
            right_content: row.right_content(),
        }
    }
}

impl Viewer {
    /// Writes one row per line: `kind<TAB>left<TAB>right<TAB>content`, with `-`
    /// for a missing line number. With `json`, writes the rows as a JSON array.
    pub fn rows(&self, old: &Path, new: &Path, new_file: bool, json: bool) -> anyhow::Result<()> {
        let (a, b) = self.load_targets(old, new, new_file)?;
        let rows = diff_lines(a.lines(), b.lines());

        if json {
            let records = rows.iter().map(RowRecord::from).collect::<Vec<_>>();
            writeln!(self.writer(), "{}", serde_json::to_string_pretty(&records)?)?;
            return Ok(());
        }

        for row in &rows {
            writeln!(
                self.writer(),
                "{}\t{}\t{}\t{}",
                row.kind(),
                number_field(row.left_line_number()),
                number_field(row.right_line_number()),
                row.content()
            )?;
        }

        Ok(())
    }
}

fn number_field(number: Option<usize>) -> String {
    number.map_or_else(|| "-".to_string(), |n| n.to_string())
}
