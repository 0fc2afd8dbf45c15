use crate::areas::viewer::Viewer;
use crate::artifacts::explain::ExplainRequest;
use std::io::Write;
use std::path::Path;
use tracing::info;

impl Viewer {
    /// Prints the explain-diff payload as JSON. The file path defaults to the
    /// new document, or the old one when the new side is absent.
    pub fn explain(
        &self,
        old: &Path,
        new: &Path,
        file_path: Option<&Path>,
        repo_id: Option<&str>,
        new_file: bool,
    ) -> anyhow::Result<()> {
        let (a, b) = self.load_targets(old, new, new_file)?;
        let file_path = file_path.unwrap_or(if b.is_present() { new } else { old });

        let request = ExplainRequest::from_targets(file_path, &a, &b)
            .with_repo_id(repo_id.map(str::to_string));
        info!(
            file = %file_path.display(),
            additions = request.additions,
            deletions = request.deletions,
            "built explain request"
        );

        writeln!(self.writer(), "{}", request.to_json()?)?;

        Ok(())
    }
}
