//! Runs the built binary and checks that stdout carries only the rendered
//! views while log records go to stderr, so batch output can be piped.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use solar_ui::{AppConfig, app};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_scenarios.csv")
}

fn run_binary(
    args: &[&str],
    stdin: &str,
) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_SoliBoxEstimator"))
        .args(["--log-level", "info"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("stdin should accept the script");

    let output = child.wait_with_output().expect("binary should finish");
    assert!(output.status.success(), "exit status: {}", output.status);
    output
}

#[test]
fn batch_stdout_is_only_the_table() {
    let expected = app::run_batch(&AppConfig::default(), &fixture_path()).unwrap();
    let file = fixture_path();

    let output = run_binary(&["batch", "--file", file.to_str().unwrap()], "");

    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{expected}\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("scenarios loaded"));
}

#[test]
fn session_stdout_is_only_the_replies() {
    let script = "open\nproceed\nquit\n";
    let mut expected = Vec::new();
    app::run_session(&AppConfig::default(), script.as_bytes(), &mut expected).unwrap();

    let output = run_binary(&["session"], script);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, String::from_utf8_lossy(&expected));
    assert!(!stdout.contains(" INFO "));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("calculator opened"));
    assert!(stderr.contains("calculator closed"));
}
