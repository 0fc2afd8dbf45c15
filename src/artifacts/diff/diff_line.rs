use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Unchanged,
    Added,
    Deleted,
}

impl From<&LineKind> for &str {
    fn from(kind: &LineKind) -> Self {
        match kind {
            LineKind::Unchanged => "unchanged",
            LineKind::Added => "added",
            LineKind::Deleted => "deleted",
        }
    }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", <&str>::from(self))
    }
}

/// One rendered row of a line diff.
///
/// Each variant carries only the sides it can have: an unchanged row has both
/// line numbers (its content is the same on both sides), a deleted row only the
/// left one, an added row only the right one. Line numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiffLine {
    Unchanged {
        left_number: usize,
        right_number: usize,
        content: String,
    },
    Deleted {
        left_number: usize,
        content: String,
    },
    Added {
        right_number: usize,
        content: String,
    },
}

impl DiffLine {
    pub fn unchanged(content: impl Into<String>, left_number: usize, right_number: usize) -> Self {
        DiffLine::Unchanged {
            left_number,
            right_number,
            content: content.into(),
        }
    }

    pub fn deleted(content: impl Into<String>, left_number: usize) -> Self {
        DiffLine::Deleted {
            left_number,
            content: content.into(),
        }
    }

    pub fn added(content: impl Into<String>, right_number: usize) -> Self {
        DiffLine::Added {
            right_number,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Unchanged { .. } => LineKind::Unchanged,
            DiffLine::Deleted { .. } => LineKind::Deleted,
            DiffLine::Added { .. } => LineKind::Added,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, DiffLine::Unchanged { .. })
    }

    pub fn left_line_number(&self) -> Option<usize> {
        match self {
            DiffLine::Unchanged { left_number, .. } | DiffLine::Deleted { left_number, .. } => {
                Some(*left_number)
            }
            DiffLine::Added { .. } => None,
        }
    }

    pub fn right_line_number(&self) -> Option<usize> {
        match self {
            DiffLine::Unchanged { right_number, .. } | DiffLine::Added { right_number, .. } => {
                Some(*right_number)
            }
            DiffLine::Deleted { .. } => None,
        }
    }

    pub fn left_content(&self) -> Option<&str> {
        match self {
            DiffLine::Unchanged { content, .. } | DiffLine::Deleted { content, .. } => {
                Some(content.as_str())
            }
            DiffLine::Added { .. } => None,
        }
    }

    pub fn right_content(&self) -> Option<&str> {
        match self {
            DiffLine::Unchanged { content, .. } | DiffLine::Added { content, .. } => {
                Some(content.as_str())
            }
            DiffLine::Deleted { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            DiffLine::Unchanged { content, .. }
            | DiffLine::Deleted { content, .. }
            | DiffLine::Added { content, .. } => content.as_str(),
        }
    }

    pub fn sign(&self) -> char {
        match self {
            DiffLine::Unchanged { .. } => ' ',
            DiffLine::Deleted { .. } => '-',
            DiffLine::Added { .. } => '+',
        }
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.sign(), self.content())
    }
}

impl Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
