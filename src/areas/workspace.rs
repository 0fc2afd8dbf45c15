use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STDIN_PATH: &str = "-";

/// Reads documents for diffing, resolving relative paths against a root directory.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn is_stdin(file_path: &Path) -> bool {
        file_path == Path::new(STDIN_PATH)
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        Self::is_stdin(file_path) || self.resolve(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        if Self::is_stdin(file_path) {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to load file content for diffing: <stdin>")?;
            debug!(bytes = content.len(), "read document from stdin");
            return Ok(content);
        }

        let full_path = self.resolve(file_path);
        let content = std::fs::read_to_string(&full_path).with_context(|| {
            format!(
                "failed to load file content for diffing: {}",
                file_path.display()
            )
        })?;
        debug!(path = %full_path.display(), bytes = content.len(), "read document");

        Ok(content)
    }
}
