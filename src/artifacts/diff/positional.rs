use crate::artifacts::diff::diff_line::DiffLine;
use derive_new::new;
use tracing::trace;

pub trait DiffAlgorithm {
    type EditScript;
    type Output;

    fn diff(&self) -> Self::EditScript;
    fn format_diff(&self) -> Self::Output
    where
        Self::EditScript: AsRef<[DiffLine]>,
        Self::Output: From<String>,
    {
        let rows = self.diff();
        let formatted = rows
            .as_ref()
            .iter()
            .map(|row| row.as_string())
            .collect::<Vec<_>>()
            .join("\n");
        formatted.into()
    }
}

/// Pairs lines purely by position.
///
/// Two cursors walk both sides in lockstep. Equal lines become unchanged rows,
/// differing lines become a deletion immediately followed by an addition, and
/// whatever remains on the longer side is emitted as plain deletions or
/// additions. There is no lookahead for a realignment point, so a single line
/// inserted near the top turns every following line into a delete/add pair.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PositionalDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: AsRef<str>> DiffAlgorithm for PositionalDiff<'_, T> {
    type EditScript = Vec<DiffLine>;
    type Output = String;

    fn diff(&self) -> Self::EditScript {
        let (n, m) = (self.a.len(), self.b.len());
        let mut rows = Vec::with_capacity(n.max(m));
        let (mut i, mut j) = (0, 0);

        while i < n || j < m {
            if i >= n {
                rows.push(DiffLine::added(self.b[j].as_ref(), j + 1));
                j += 1;
            } else if j >= m {
                rows.push(DiffLine::deleted(self.a[i].as_ref(), i + 1));
                i += 1;
            } else if self.a[i].as_ref() == self.b[j].as_ref() {
                rows.push(DiffLine::unchanged(self.a[i].as_ref(), i + 1, j + 1));
                i += 1;
                j += 1;
            } else {
                rows.push(DiffLine::deleted(self.a[i].as_ref(), i + 1));
                rows.push(DiffLine::added(self.b[j].as_ref(), j + 1));
                i += 1;
                j += 1;
            }
        }

        trace!(old = n, new = m, rows = rows.len(), "positional diff computed");
        rows
    }
}

/// Splits a document into lines on `'\n'`, keeping every piece.
///
/// A final newline leaves a trailing empty line and an empty document is a
/// single empty line. Carriage returns are kept as part of the line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|s| s.to_string()).collect()
}

pub fn diff_lines<T: AsRef<str>>(old_lines: &[T], new_lines: &[T]) -> Vec<DiffLine> {
    PositionalDiff::new(old_lines, new_lines).diff()
}

pub fn diff_text(old: &str, new: &str) -> Vec<DiffLine> {
    diff_lines(&split_lines(old), &split_lines(new))
}
