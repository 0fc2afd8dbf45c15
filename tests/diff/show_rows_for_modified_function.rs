use crate::common::command::{function_edit_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_rows_for_modified_function(
    function_edit_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_linediff_command(
        function_edit_dir.path(),
        &["rows", "old.py", "new.py"],
    ))?;

    let expected_output = "unchanged\t1\t1\tdef f():\n\
        deleted\t2\t-\t    pass\n\
        added\t-\t2\t    return 1\n\
        unchanged\t3\t3\t\n";

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_rows_as_json(function_edit_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_linediff_command(
        function_edit_dir.path(),
        &["rows", "--json", "old.py", "new.py"],
    ))?;
    let rows: serde_json::Value = serde_json::from_str(&actual_output)?;

    pretty_assertions::assert_eq!(
        rows[1],
        serde_json::json!({ "kind": "deleted", "left_line_number": 2, "left_content": "    pass" })
    );
    pretty_assertions::assert_eq!(rows.as_array().map(Vec::len), Some(4));

    Ok(())
}
