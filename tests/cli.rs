//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn stamp() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stamp"));
    cmd.env_remove("STAMP_RECORD").env_remove("STAMP_REPLAY");
    cmd
}

fn run_stamp(args: &[&str]) -> std::process::Output {
    stamp().args(args).output().expect("failed to run stamp binary")
}

fn write_clock_cassette(path: &Path, at: &str) {
    let yaml = format!(
        "name: cli-test\nrecorded_at: 2015-12-12T23:00:00Z\ninteractions:\n  \
         - seq: 0\n    port: clock\n    method: now\n    input: {{}}\n    output: \"{at}\"\n"
    );
    std::fs::write(path, yaml).unwrap();
}

#[test]
fn now_prints_nineteen_character_timestamp() {
    let output = run_stamp(&["now"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    let line = stdout.trim_end_matches('\n');
    assert_eq!(line.len(), 19, "unexpected output: {line:?}");
    assert!(stamp::check_layout(line).is_ok());
}

#[test]
fn verify_reports_ok() {
    let output = run_stamp(&["verify"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("ok: "));
}

#[test]
fn now_replays_cassette_from_flag() {
    let dir = std::env::temp_dir().join("stamp_cli_replay_flag");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("clock.cassette.yaml");
    write_clock_cassette(&path, "2015-12-12T23:00:00");

    let output = stamp().args(["now", "--replay"]).arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2015/12/12 23:00:00\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn now_replays_cassette_from_environment() {
    let dir = std::env::temp_dir().join("stamp_cli_replay_env");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("clock.cassette.yaml");
    write_clock_cassette(&path, "2000-01-01T00:00:05");

    let output = stamp().arg("now").env("STAMP_REPLAY", &path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2000/01/01 00:00:05\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replaying_cassette_without_clock_reads_fails_cleanly() {
    let dir = std::env::temp_dir().join("stamp_cli_replay_empty");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.cassette.yaml");
    std::fs::write(&path, "name: empty\nrecorded_at: 2015-12-12T23:00:00Z\ninteractions: []\n")
        .unwrap();

    let output = stamp().args(["now", "--replay"]).arg(&path).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("no clock::now interactions"));
    assert!(!stderr.contains("panicked"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replaying_non_datetime_clock_read_fails_cleanly() {
    let dir = std::env::temp_dir().join("stamp_cli_replay_garbage");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("garbage.cassette.yaml");
    write_clock_cassette(&path, "yesterday");

    let output = stamp().args(["now", "--replay"]).arg(&path).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("is not a local date/time"));
    assert!(!stderr.contains("panicked"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn record_and_replay_together_fails() {
    let output = stamp()
        .args(["now", "--record", "out.cassette.yaml"])
        .env("STAMP_REPLAY", "in.cassette.yaml")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Cannot record"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_stamp(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
