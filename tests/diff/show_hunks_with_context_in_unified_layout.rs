use crate::common::command::{run_linediff_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_hunks_with_context_in_unified_layout(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = (1..=12).map(|i| format!("line {i}")).collect::<Vec<_>>();
    let mut new = old.clone();
    new[1] = "line two".to_string();
    new[10] = "line eleven".to_string();

    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        old.join("\n"),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        new.join("\n"),
    ));

    let actual_output = stdout_of(&mut run_linediff_command(
        workspace_dir.path(),
        &["diff", "-l", "unified", "-U", "1", "old.txt", "new.txt"],
    ))?;

    let expected_output = [
        "--- a/old.txt",
        "+++ b/new.txt",
        "@@ -1,3 +1,3 @@",
        " 1  1  line 1",
        " 2    -line 2",
        "    2 +line two",
        " 3  3  line 3",
        "@@ -10,3 +10,3 @@",
        "10 10  line 10",
        "11    -line 11",
        "   11 +line eleven",
        "12 12  line 12",
    ]
    .map(|line| format!("{line}\n"))
    .concat();

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn identical_documents_have_no_hunks(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let content = crate::common::file::generate_lines(20).join("\n");
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), content.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), content));

    let actual_output = stdout_of(&mut run_linediff_command(
        workspace_dir.path(),
        &["diff", "-U", "3", "a.txt", "b.txt"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "--- a/a.txt\n+++ b/b.txt\n");

    Ok(())
}
