use crate::areas::workspace::Workspace;
use crate::artifacts::diff::positional::split_lines;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";

pub type LineSet = Vec<String>;

/// One side of a diff: a labelled document split into lines, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) content: Option<String>,
    pub(crate) lines: LineSet,
}

impl DiffTarget {
    pub fn from_text(file: &Path, content: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            content: Some(content.to_string()),
            lines: split_lines(content),
        }
    }

    pub fn from_file(file: &Path, workspace: &Workspace) -> anyhow::Result<Self> {
        let content = workspace.read_file(file)?;
        Ok(Self::from_text(file, &content))
    }

    /// Like `from_file`, but a missing file becomes an absent document.
    pub fn from_file_or_nothing(file: &Path, workspace: &Workspace) -> anyhow::Result<Self> {
        if workspace.exists(file) {
            Self::from_file(file, workspace)
        } else {
            Ok(Self::from_nothing(file))
        }
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            content: None,
            lines: Vec::new(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_present(&self) -> bool {
        self.content.is_some()
    }

    /// Raw content, empty for an absent document.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn diff_path(&self, prefix: &str) -> PathBuf {
        if self.is_present() {
            Path::new(prefix).join(&self.file)
        } else {
            Path::new(NULL_PATH).to_path_buf()
        }
    }
}
