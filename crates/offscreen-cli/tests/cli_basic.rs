//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory (OFFSCREEN_ENV=dev).

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "offscreen-cli", "--"])
        .args(args)
        .env("OFFSCREEN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_timer_status() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "Timer status failed");
    assert!(stdout.contains("remaining_secs"));
}

#[test]
fn test_timer_start_then_pause() {
    let (_, _, code) = run_cli(&["timer", "start"]);
    assert_eq!(code, 0, "Timer start failed");
    let (_, _, code) = run_cli(&["timer", "pause"]);
    assert_eq!(code, 0, "Timer pause failed");
}

#[test]
fn test_timer_pause_when_idle_is_silent() {
    let (_, _, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0, "Timer reset failed");
    let (_, _, code) = run_cli(&["timer", "pause"]);
    assert_eq!(code, 0, "Pause from idle should be a silent no-op");
}

#[test]
fn test_timer_reset() {
    let (stdout, _, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0, "Timer reset failed");
    assert!(stdout.contains("TimerReset"));
}

#[test]
fn test_usage_summary_json_is_deterministic_for_seed() {
    let (a, _, code_a) = run_cli(&["usage", "summary", "--seed", "42", "--json"]);
    let (b, _, code_b) = run_cli(&["usage", "summary", "--seed", "42", "--json"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(a, b, "Same seed must produce identical output");

    let parsed: serde_json::Value = serde_json::from_str(&a).unwrap();
    assert_eq!(parsed["buckets"].as_array().unwrap().len(), 7);
}

#[test]
fn test_usage_apps() {
    let (stdout, _, code) = run_cli(&["usage", "apps", "--seed", "7", "--json"]);
    assert_eq!(code, 0, "Usage apps failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);
}

#[test]
fn test_goal_add_list_remove() {
    let (stdout, _, code) = run_cli(&["goal", "add", "CLI Goal Test", "--minutes", "90"]);
    assert_eq!(code, 0, "Goal add failed");
    let goal: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = goal["id"].as_str().unwrap();

    let (stdout, _, code) = run_cli(&["goal", "list", "--json"]);
    assert_eq!(code, 0, "Goal list failed");
    assert!(stdout.contains("CLI Goal Test"));

    let (_, _, code) = run_cli(&["goal", "remove", id]);
    assert_eq!(code, 0, "Goal remove failed");
}

#[test]
fn test_goal_add_rejects_zero_limit() {
    let (_, stderr, code) = run_cli(&["goal", "add", "Zero Limit"]);
    assert_ne!(code, 0, "Zero-limit goal should be rejected");
    assert!(stderr.contains("error"));
}

#[test]
fn test_schedule_list() {
    let (stdout, _, code) = run_cli(&["schedule", "list", "--json"]);
    assert_eq!(code, 0, "Schedule list failed");
    // First run seeds the default schedules.
    assert!(stdout.contains("Work Focus"));
}

#[test]
fn test_schedule_add_and_remove() {
    let (stdout, _, code) = run_cli(&[
        "schedule", "add", "CLI Schedule Test", "--start", "08:00", "--end", "09:30",
        "--days", "mon,wed,fri",
    ]);
    assert_eq!(code, 0, "Schedule add failed");
    let schedule: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = schedule["id"].as_str().unwrap();

    let (_, _, code) = run_cli(&["schedule", "disable", id]);
    assert_eq!(code, 0, "Schedule disable failed");

    let (_, _, code) = run_cli(&["schedule", "remove", id]);
    assert_eq!(code, 0, "Schedule remove failed");
}

#[test]
fn test_schedule_rejects_bad_time() {
    let (_, _, code) = run_cli(&[
        "schedule", "add", "Bad Time", "--start", "25:99", "--end", "10:00",
    ]);
    assert_ne!(code, 0, "Invalid time should be rejected");
}

#[test]
fn test_stats_today() {
    let (stdout, _, code) = run_cli(&["stats", "today"]);
    assert_eq!(code, 0, "Stats today failed");
    assert!(stdout.contains("today_sessions"));
}

#[test]
fn test_stats_all() {
    let (_, _, code) = run_cli(&["stats", "all"]);
    assert_eq!(code, 0, "Stats all failed");
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "timer.focus_minutes"]);
    assert_eq!(code, 0, "Config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_set() {
    let (_, _, code) = run_cli(&["config", "set", "ui.prefer_dark", "true"]);
    assert_eq!(code, 0, "Config set failed");
}

#[test]
fn test_config_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0, "Unknown config key should fail");
}

#[test]
fn test_config_theme() {
    let (stdout, _, code) = run_cli(&["config", "theme"]);
    assert_eq!(code, 0, "Config theme failed");
    assert!(stdout.contains("background"));
}
