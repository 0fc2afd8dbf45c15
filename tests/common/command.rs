use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn old_python() -> String {
    "def f():\n    pass\n".to_string()
}

#[fixture]
pub fn new_python() -> String {
    "def f():\n    return 1\n".to_string()
}

/// Workspace holding `old.py` and `new.py` that differ on their second line.
#[fixture]
pub fn function_edit_dir(workspace_dir: TempDir, old_python: String, new_python: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("old.py"), old_python));
    write_file(FileSpec::new(workspace_dir.path().join("new.py"), new_python));

    workspace_dir
}

/// Workspace where `new.txt` inserts one line at the top of `old.txt`.
#[fixture]
pub fn insertion_at_top_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "a\nb\nc".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "x\na\nb\nc".to_string(),
    ));

    workspace_dir
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    run_linediff_command_with_color(dir, "never", args)
}

pub fn run_linediff_command_with_color(dir: &Path, color: &str, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("LINEDIFF_LAYOUT");
    cmd.env_remove("LINEDIFF_WIDTH");
    cmd.current_dir(dir);
    cmd.args(["--color", color]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    let stdout = output.get_output().stdout.clone();
    Ok(String::from_utf8(stdout)?)
}
