use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command wired to an isolated database and config
fn liftlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("liftlog").unwrap();
    cmd.env("LIFTLOG_DB_PATH", dir.path().join("db"));
    cmd.env("LIFTLOG_CONFIG", dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("liftlog").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("strength-training log"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("liftlog").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("liftlog").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_liftlog"));
}

#[test]
fn test_plan_list_shows_program() {
    let dir = TempDir::new().unwrap();
    liftlog(&dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Legs (Squat Focus)"))
        .stdout(predicate::str::contains("Rest Day"));
}

#[test]
fn test_plan_show_day() {
    let dir = TempDir::new().unwrap();
    liftlog(&dir)
        .args(["plan", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barbell Bench Press"))
        .stdout(predicate::str::contains("Chest, Shoulders, Triceps"));
}

#[test]
fn test_plan_show_unknown_day() {
    let dir = TempDir::new().unwrap();
    liftlog(&dir)
        .args(["plan", "show", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan day 9"));
}

#[test]
fn test_log_list_show_delete_round_trip() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args([
            "session",
            "log",
            "2",
            "--duration",
            "50",
            "--date",
            "2025-06-02",
            "--set",
            "Barbell Bench Press: 185x8, 185x8, 180x6",
            "--set",
            "Dips: bw x 12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session logged"))
        .stdout(predicate::str::contains("4 sets"));

    liftlog(&dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Push (Upper Body)"))
        .stdout(predicate::str::contains("50 min"));

    // Pull the id out of the JSON listing, then show and delete by prefix
    let output = liftlog(&dir)
        .args(["session", "list", "--json"])
        .output()
        .unwrap();
    let sessions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = sessions[0]["id"].as_str().unwrap();

    liftlog(&dir)
        .args(["session", "show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barbell Bench Press"))
        .stdout(predicate::str::contains("185.0 lbs x 8"));

    liftlog(&dir)
        .args(["session", "delete", &id[..8], "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session deleted"));

    liftlog(&dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions logged yet"));
}

#[test]
fn test_session_list_filters_by_day() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args([
            "session",
            "log",
            "1",
            "--date",
            "2025-06-02",
            "--set",
            "Barbell Back Squat: 225x5",
        ])
        .assert()
        .success();

    liftlog(&dir)
        .args([
            "session",
            "log",
            "3",
            "--date",
            "2025-06-04",
            "--set",
            "Weighted Pull-Up: 25x6",
        ])
        .assert()
        .success();

    liftlog(&dir)
        .args(["session", "list", "--day", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pull (Upper Body)"))
        .stdout(predicate::str::contains("Legs (Squat Focus)").not());

    liftlog(&dir)
        .args(["session", "list", "--from", "2025-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pull (Upper Body)"))
        .stdout(predicate::str::contains("Legs (Squat Focus)").not());
}

#[test]
fn test_rest_day_not_logged() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args(["session", "log", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest day"));

    liftlog(&dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions logged yet"));
}

#[test]
fn test_invalid_set_line_fails() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args(["session", "log", "1", "--set", "just some squats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing exercise name"));
}

#[test]
fn test_weight_tracking_round_trip() {
    let dir = TempDir::new().unwrap();

    // Entered in kg, stored and displayed in lbs
    liftlog(&dir)
        .args(["weight", "log", "80", "--unit", "kg", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("176.4 lbs"));

    liftlog(&dir)
        .args(["weight", "log", "175.5", "--date", "2025-06-05"])
        .assert()
        .success();

    liftlog(&dir)
        .args(["weight", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("176.4 lbs"))
        .stdout(predicate::str::contains("175.5 lbs"));

    let output = liftlog(&dir)
        .args(["weight", "list", "--json"])
        .output()
        .unwrap();
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = entries[0]["id"].as_str().unwrap().to_string();

    liftlog(&dir)
        .args(["weight", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight entry deleted"));
}

#[test]
fn test_stats_reports_logged_history() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args([
            "session",
            "log",
            "1",
            "--duration",
            "60",
            "--date",
            "2025-06-02",
            "--set",
            "Barbell Back Squat: 225x5, 225x5",
        ])
        .assert()
        .success();

    liftlog(&dir)
        .args([
            "session",
            "log",
            "2",
            "--duration",
            "50",
            "--date",
            "2025-06-03",
            "--set",
            "Barbell Bench Press: 185x8",
        ])
        .assert()
        .success();

    liftlog(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training Statistics"))
        .stdout(predicate::str::contains("Period: All Time"))
        .stdout(predicate::str::contains("Personal Records"))
        .stdout(predicate::str::contains("Barbell Back Squat"))
        .stdout(predicate::str::contains("Streak: 2 days"));

    let output = liftlog(&dir)
        .args(["stats", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["quick"]["workouts"], 2);
    assert_eq!(report["quick"]["total_minutes"], 110);
    assert_eq!(report["streak_days"], 2);
    // 2*5*225 + 8*185
    assert_eq!(report["volume"]["total_lbs"], 3730.0);
    assert_eq!(report["personal_records"].as_array().unwrap().len(), 2);
    // Day 1 has legs + core, day 2 chest/shoulders/triceps
    assert!(report["muscle_distribution"].as_array().unwrap().len() >= 4);
}

#[test]
fn test_stats_empty_history() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args(["stats", "--week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period: Week"))
        .stdout(predicate::str::contains("Workouts: 0"));
}

#[test]
fn test_profile_set_and_show() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Champion"));

    liftlog(&dir)
        .args([
            "profile", "set", "--name", "Sam", "--unit", "kg", "--target-weight", "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated"));

    liftlog(&dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sam"))
        .stdout(predicate::str::contains("kg"))
        .stdout(predicate::str::contains("80.0 kg"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();

    liftlog(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));

    liftlog(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    liftlog(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[profile]"))
        .stdout(predicate::str::contains("rest_timer_enabled"));
}
