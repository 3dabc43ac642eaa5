//! Runs the `hello_flags` binary and checks greetings, help and failures.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;

fn run(args: &[&str]) -> Result<std::process::Output> {
    #[expect(
        deprecated,
        reason = "cargo_bin is the standard assert_cmd API"
    )]
    let mut cmd = Command::cargo_bin("hello_flags")?;
    cmd.env("RUST_BACKTRACE", "0").env_remove("RUST_LOG").args(args);
    Ok(cmd.output()?)
}

#[rstest]
#[case::defaults(&[], "Hello, world.\n")]
#[case::named(&["--name", "Ferris", "--excited"], "Hello, Ferris!\n")]
#[case::repeated(&["--times=2", "--name=you"], "Hello, you.\nHello, you.\n")]
#[case::silent(&["--times=0"], "")]
fn greets_from_flags(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
    let output = run(args)?;
    ensure!(output.status.success(), "status {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(stdout == expected, "stdout {stdout:?}");
    Ok(())
}

#[rstest]
fn help_lists_flags_and_exits_cleanly() -> Result<()> {
    let output = run(&["--help"])?;
    ensure!(output.status.success(), "status {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(stdout.contains("--name <string>"), "help {stdout}");
    ensure!(stdout.contains("who to greet (default world)"), "help {stdout}");
    ensure!(stdout.contains("delay between greetings"), "help {stdout}");
    ensure!(!stdout.contains("(default 0s)"), "zero default shown: {stdout}");
    Ok(())
}

#[rstest]
#[case::bad_number(&["--times=many"], "for flag `times`")]
#[case::unknown(&["--shout"], "--shout")]
fn rejects_bad_arguments(#[case] args: &[&str], #[case] fragment: &str) -> Result<()> {
    let output = run(args)?;
    ensure!(!output.status.success(), "bad arguments accepted");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(stderr.contains(fragment), "stderr {stderr}");
    Ok(())
}
