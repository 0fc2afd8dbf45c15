use crate::artifacts::diff::diff_line::DiffLine;
use std::ops::Range;

/// Context lines used when counting hunks for a summary.
pub const SUMMARY_CONTEXT: usize = 3;

/// A contiguous run of changed rows, padded with unchanged context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    a_start: usize,
    a_size: usize,
    b_start: usize,
    b_size: usize,
    lines: Vec<DiffLine>,
}

impl Hunk {
    fn from_range(rows: &[DiffLine], range: Range<usize>) -> Self {
        let lines = rows[range.clone()].to_vec();
        let preceding = &rows[..range.start];

        let a_size = lines.iter().filter_map(DiffLine::left_line_number).count();
        let a_start = lines
            .iter()
            .find_map(DiffLine::left_line_number)
            .or_else(|| preceding.iter().rev().find_map(DiffLine::left_line_number))
            .unwrap_or(0);

        let b_size = lines.iter().filter_map(DiffLine::right_line_number).count();
        let b_start = lines
            .iter()
            .find_map(DiffLine::right_line_number)
            .or_else(|| preceding.iter().rev().find_map(DiffLine::right_line_number))
            .unwrap_or(0);

        Hunk {
            a_start,
            a_size,
            b_start,
            b_size,
            lines,
        }
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_size, self.b_start, self.b_size
        )
    }
}

/// Groups rows into hunks, keeping up to `context` unchanged rows around each
/// run of changes. Hunks whose padded ranges touch are merged.
pub fn hunks(rows: &[DiffLine], context: usize) -> Vec<Hunk> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut pos = 0;

    while pos < rows.len() {
        if !rows[pos].is_change() {
            pos += 1;
            continue;
        }

        let run_start = pos;
        while pos < rows.len() && rows[pos].is_change() {
            pos += 1;
        }

        let start = run_start.saturating_sub(context);
        let end = (pos + context).min(rows.len());

        match ranges.last_mut() {
            Some(last) if start <= last.end => last.end = end,
            _ => ranges.push(start..end),
        }
    }

    ranges
        .into_iter()
        .map(|range| Hunk::from_range(rows, range))
        .collect()
}
