//! CLI Integration Tests
//!
//! These verify the CLI commands work end-to-end against a temporary
//! data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("heartline").expect("Failed to find heartline binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heartline"))
        .stdout(predicate::str::contains("Theme:"))
        .stdout(predicate::str::contains("Locale:"));
}

#[test]
fn test_info_shows_default_theme() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("love"));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spring"))
        .stdout(predicate::str::contains("winter"))
        .stdout(predicate::str::contains("love"));
}

#[test]
fn test_theme_set_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "winter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to winter"));

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: winter"))
        .stdout(predicate::str::contains("snow-drift"))
        .stdout(predicate::str::contains("card-winter"));
}

#[test]
fn test_theme_set_unknown_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "galaxy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn test_theme_toggle_dark_changes_renderer_name() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "winter"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["theme", "toggle-dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode on"));

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("darkWinter"));
}

// ============================================================================
// Locale Command Tests
// ============================================================================

#[test]
fn test_locale_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Tiếng Việt"));
}

#[test]
fn test_locale_show_interpolates() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "show", "couple.days_together", "count=42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42 days together"));
}

#[test]
fn test_locale_set_switches_messages() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "set", "vi"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["locale", "show", "couple.days_together", "count=42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42 ngày bên nhau"));
}

#[test]
fn test_locale_set_unknown_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "set", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown locale"));
}

#[test]
fn test_locale_keys_lists_catalog() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("couple.invitation_sent"))
        .stdout(predicate::str::contains("timeline.empty"));
}

// ============================================================================
// Timeline Command Tests
// ============================================================================

#[test]
fn test_timeline_renders_demo_data() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Our timeline"))
        .stdout(predicate::str::contains("First trip"));
}

#[test]
fn test_timeline_kind_filter() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["timeline", "--kind", "reminder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book anniversary dinner"))
        .stdout(predicate::str::contains("First trip").not());
}

#[test]
fn test_timeline_unknown_kind_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["timeline", "--kind", "party"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timeline kind"));
}

// ============================================================================
// Session Command Tests
// ============================================================================

#[test]
fn test_session_demo_runs_full_lifecycle() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["session", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Minh!"))
        .stdout(predicate::str::contains("Connection status: Connected"))
        .stdout(predicate::str::contains("Session demo complete"));
}

#[test]
fn test_session_demo_respects_locale() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["locale", "set", "vi"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["session", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chào mừng trở lại, Minh!"));
}
