use crate::areas::workspace::Workspace;
use crate::artifacts::core::settings::Settings;
use crate::artifacts::diff::diff_target::DiffTarget;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point for the commands: owns the output writer, the workspace that
/// documents are read from and the display settings.
pub struct Viewer {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    settings: Settings,
}

impl Viewer {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        settings: Settings,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("failed to resolve directory {path}"))?;

        Ok(Viewer {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            settings,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads both sides of a diff. With `new_file` a missing document is
    /// treated as absent instead of an error.
    pub fn load_targets(
        &self,
        old: &Path,
        new: &Path,
        new_file: bool,
    ) -> anyhow::Result<(DiffTarget, DiffTarget)> {
        if Workspace::is_stdin(old) && Workspace::is_stdin(new) {
            anyhow::bail!("only one side of a diff can be read from stdin");
        }

        let load = |file: &Path| {
            if new_file {
                DiffTarget::from_file_or_nothing(file, &self.workspace)
            } else {
                DiffTarget::from_file(file, &self.workspace)
            }
        };

        let a = load(old)?;
        let b = load(new)?;
        if !a.is_present() && !b.is_present() {
            anyhow::bail!(
                "failed to load file content for diffing: neither {} nor {} exists",
                old.display(),
                new.display()
            );
        }

        Ok((a, b))
    }
}
