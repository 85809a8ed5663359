//! バイナリを起動して終了コードと出力を確認する

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_surgery-qc"))
        .args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("SURGERY_QC_LOG")
        .output()
        .expect("failed to run surgery-qc")
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn config_check_without_key_exits_one() {
    let output = run(&["--config-check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(combined(&output).contains("OPENAI_API_KEY"));
}

#[test]
fn help_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config-check"));
    assert!(stdout.contains("appendectomy"));
}

#[test]
fn missing_input_exits_one_with_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--file or --text"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn evaluate_without_key_fails_before_network() {
    let output = run(&["--text", "1. 常规消毒铺巾\n2. 逐层缝合切口", "--type", "general"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("OPENAI_API_KEY is not set"));
    assert!(output.stdout.is_empty());
}

#[test]
fn show_prompt_needs_no_key() {
    let dir = tempfile::tempdir().unwrap();
    let steps = dir.path().join("steps.txt");
    std::fs::write(&steps, "1. 在McBurney点作斜切口\n2. 切除阑尾\n").unwrap();

    let output = run(&[
        "--show-prompt",
        "--file",
        steps.to_str().unwrap(),
        "--type",
        "appendectomy",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("阑尾切除术"));
    assert!(stdout.contains("切除阑尾"));
}
