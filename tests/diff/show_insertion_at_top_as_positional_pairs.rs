use crate::common::command::{insertion_at_top_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_insertion_at_top_as_positional_pairs(
    insertion_at_top_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_linediff_command(
        insertion_at_top_dir.path(),
        &["diff", "--layout", "unified", "-U", "0", "old.txt", "new.txt"],
    ))?;

    // lines are paired by position, so nothing after the insertion lines up
    let expected_output = [
        "--- a/old.txt",
        "+++ b/new.txt",
        "@@ -1,3 +1,4 @@",
        "1   -a",
        "  1 +x",
        "2   -b",
        "  2 +a",
        "3   -c",
        "  3 +b",
        "  4 +c",
    ]
    .map(|line| format!("{line}\n"))
    .concat();

    pretty_assertions::assert_eq!(actual_output, expected_output);

    let stat_output = stdout_of(&mut run_linediff_command(
        insertion_at_top_dir.path(),
        &["stat", "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(stat_output, "new.txt | +4 / -3 lines\n");

    Ok(())
}
