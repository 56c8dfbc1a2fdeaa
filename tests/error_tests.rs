//! Error scenario integration tests

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn termnotify_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termnotify"));
    cmd.env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("TERM_PROGRAM", "WezTerm");
    cmd
}

#[test]
fn send_without_message_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["send", "--output", "stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Message is required"),
        "Expected error about missing message, got: {}",
        stderr
    );
}

#[test]
fn invalid_protocol_flag() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["--protocol", "osc42", "send", "hi"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("osc42") && stderr.contains("osc777"),
        "Expected error listing valid protocols, got: {}",
        stderr
    );
}

#[test]
fn invalid_protocol_from_environment() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .env("TERMNOTIFY_FORCE_PROTOCOL", "bogus")
        .args(["send", "hi", "--output", "stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("force_protocol"),
        "Expected error naming the key, got: {}",
        stderr
    );
}

#[test]
fn invalid_fallback_from_environment() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .env("TERMNOTIFY_ENABLE_FALLBACK", "sometimes")
        .args(["bell", "--output", "stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TERMNOTIFY_ENABLE_FALLBACK"), "got: {}", stderr);
}

#[test]
fn unparseable_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("termnotify");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "default_title = [unclosed").unwrap();

    let output = termnotify_bin(home.path())
        .args(["bell", "--output", "stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"), "got: {}", stderr);
}

#[test]
fn invalid_progress_value() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["progress", "half"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("indeterminate"), "got: {}", stderr);
}

#[test]
fn invalid_output_target() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["bell", "--output", "printer"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") && stderr.contains("default_title"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_protocol() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["config", "set", "force_protocol", "osc1"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid") && stderr.contains("force_protocol"),
        "Expected error about invalid protocol, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["config", "set", "enable_fallback", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    let first = termnotify_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = termnotify_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}

#[test]
fn config_list_with_no_file() {
    let home = TempDir::new().unwrap();
    let output = termnotify_bin(home.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") && stdout.contains("force_protocol"),
        "Expected config list output, got: {}",
        stdout
    );
}
