//! End-to-end tests for the printkit binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user config file.
fn printkit(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("printkit").unwrap();
    cmd.env("PRINTKIT_CONFIG", config_dir.path().join("config.toml"));
    cmd.env_remove("PRINTKIT_LOG");
    cmd
}

#[test]
fn render_prints_centered_window() {
    let dir = TempDir::new().unwrap();
    let output = printkit(&dir)
        .args(["render", "--width", "11", "--height", "6", "Some", "Text!"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let plain = printkit::width::strip_color_codes(&stdout).into_owned();
    assert_eq!(
        plain,
        "+---------+\n|         |\n|  Some   |\n|  Text!  |\n|         |\n+---------+\n"
    );
}

#[test]
fn render_accepts_justification_and_color() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args([
            "render", "--width", "12", "--height", "4", "-x", "right", "-y", "top", "-c", "r",
            "More",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31m+----------+\x1b[0m"))
        .stdout(predicate::str::contains("     More "));
}

#[test]
fn render_rejects_unknown_justification() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["render", "--width", "10", "--height", "3", "-x", "middle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("middle"));
}

#[test]
fn render_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[window]\nborder = \"bg\"\nhorizontal = \"left\"\n",
    )
    .unwrap();

    printkit(&dir)
        .args(["render", "--width", "10", "--height", "3", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[92m+--------+"))
        .stdout(predicate::str::contains("\x1b[0m ab     \x1b[92m|"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[window]\nvertical = 3\n").unwrap();

    printkit(&dir)
        .args(["render", "--width", "10", "--height", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn color_wraps_text_in_codes() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["color", "-c", "bright cyan", "hello"])
        .assert()
        .success()
        .stdout("\x1b[96mhello\x1b[0m\n");
}

#[test]
fn color_with_unknown_name_uses_reset() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["color", "-c", "chartreuse", "hello"])
        .assert()
        .success()
        .stdout("\x1b[0mhello\x1b[0m\n");
}

#[test]
fn ask_prompts_and_echoes_answer() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["ask", "-c", "g", "Name? "])
        .write_stdin("Ada\n")
        .assert()
        .success()
        .stdout("\x1b[32mName? \x1b[0mAda\n");
}

#[cfg(unix)]
#[test]
fn files_truncates_paths_under_base() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["files", "/srv/app", "/srv/app/log/today.txt", "/etc/hosts", "/srv/app"])
        .assert()
        .success()
        .stdout(".../log/today.txt\n/etc/hosts\n/srv/app\n");
}

#[test]
fn config_shows_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults (no config file)"))
        .stdout(predicate::str::contains("[window]"))
        .stdout(predicate::str::contains("vertical = \"center\""));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    printkit(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printkit"));
}

#[test]
fn window_without_terminal_does_not_panic() {
    let dir = TempDir::new().unwrap();
    let output = printkit(&dir).args(["window", "hi"]).output().unwrap();
    // Under a test harness there may be no terminal: either a window or a clean error.
    if output.status.success() {
        assert!(String::from_utf8_lossy(&output.stdout).contains("hi"));
    } else {
        assert!(String::from_utf8_lossy(&output.stderr).contains("terminal size"));
    }
}
