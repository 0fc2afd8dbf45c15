use crate::artifacts::diff::diff_line::DiffLine;
use derive_new::new;
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
}

impl DiffStats {
    pub fn from_rows(rows: &[DiffLine]) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            match row {
                DiffLine::Added { .. } => stats.additions += 1,
                DiffLine::Deleted { .. } => stats.deletions += 1,
                DiffLine::Unchanged { .. } => {}
            }
            stats
        })
    }

    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }

    /// One-line description such as `src/f.py: +2 lines, -1 lines in 1 hunk(s)`.
    pub fn summary(&self, file_path: &Path, hunk_count: usize) -> String {
        if hunk_count == 0 {
            return "No changes detected.".to_string();
        }

        let changes = match (self.additions, self.deletions) {
            (0, deletions) => format!("-{deletions} lines removed"),
            (additions, 0) => format!("+{additions} lines added"),
            (additions, deletions) => format!("+{additions} lines, -{deletions} lines"),
        };

        format!("{}: {changes} in {hunk_count} hunk(s)", file_path.display())
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} / -{} lines", self.additions, self.deletions)
    }
}
