use crate::common::command::{function_edit_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unified_diff_for_modified_function(
    function_edit_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_linediff_command(
        function_edit_dir.path(),
        &["diff", "--layout", "unified", "old.py", "new.py"],
    ))?;

    let expected_output = "--- a/old.py\n\
        +++ b/new.py\n\
        1 1  def f():\n\
        2   -    pass\n  \
        2 +    return 1\n\
        3 3  \n";

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
