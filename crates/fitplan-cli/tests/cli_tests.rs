use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn fitplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fitplan").expect("Failed to find fitplan binary");
    cmd.arg("--no-color");
    cmd
}

const OFFICE_DAY: [&str; 9] = [
    "schedule",
    "--wake",
    "06:00",
    "--work-start",
    "09:00",
    "--work-end",
    "17:00",
    "--sleep",
    "22:00",
];

#[test]
fn test_cli_schedule_without_workout() {
    fitplan_cmd()
        .args(OFFICE_DAY)
        .args(["--name", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Saved schedule with ID: 1"))
        .stdout(predicate::str::contains("# 1. Schedule for Ada"))
        .stdout(predicate::str::contains(
            "- **6:00 AM – 6:20 AM** Morning Routine: Hydrate & get ready",
        ))
        .stdout(predicate::str::contains("- **9:00 AM – 5:00 PM** Work: Focus time"))
        .stdout(predicate::str::contains(
            "- **5:00 PM – 6:00 PM** Evening Routine: Relax & family time",
        ))
        .stdout(predicate::str::contains("- **10:00 PM – 6:00 AM** Sleep: Recovery"))
        .stdout(predicate::str::contains("Workout").not());
}

#[test]
fn test_cli_schedule_with_morning_workout() {
    fitplan_cmd()
        .args(OFFICE_DAY)
        .args([
            "--workout-slot",
            "morning",
            "--duration",
            "45",
            "--goal",
            "gain",
            "--level",
            "advanced",
            "--equipment",
            "gym",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule for Person"))
        .stdout(predicate::str::contains(
            "- **6:20 AM – 7:05 AM** Workout: gain/advanced/gym",
        ))
        .stdout(predicate::str::contains("### Main Set"))
        .stdout(predicate::str::contains("Barbell Back Squat"))
        .stdout(predicate::str::contains("Controlled tempo"));
}

#[test]
fn test_cli_schedule_rejects_bad_time() {
    fitplan_cmd()
        .args([
            "schedule",
            "--wake",
            "6am",
            "--work-start",
            "09:00",
            "--work-end",
            "17:00",
            "--sleep",
            "22:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate schedule"))
        .stderr(predicate::str::contains("Invalid clock time '6am'"));
}

#[test]
fn test_cli_schedule_rejects_inverted_work_hours() {
    fitplan_cmd()
        .args([
            "schedule",
            "--wake",
            "06:00",
            "--work-start",
            "17:00",
            "--work-end",
            "09:00",
            "--sleep",
            "22:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("work_end"));
}

#[test]
fn test_cli_schedule_json_output() {
    let output = fitplan_cmd()
        .arg("--json")
        .args(OFFICE_DAY)
        .output()
        .expect("Failed to run fitplan");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "Person");
    assert_eq!(value["schedule"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["schedule"][1]["title"], "Work");
    assert_eq!(value["schedule"][3]["start"], "10:00 PM");
    assert_eq!(value["schedule"][3]["end"], "6:00 AM");
}

#[test]
fn test_cli_workout() {
    fitplan_cmd()
        .args(["workout", "--goal", "lose", "--equipment", "dumbbells"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workout"))
        .stdout(predicate::str::contains("## Warm-up"))
        .stdout(predicate::str::contains("DB Goblet Squat"))
        .stdout(predicate::str::contains("Circuit style"));
}

#[test]
fn test_cli_exercise_list_by_category() {
    fitplan_cmd()
        .args(["exercise", "list", "--category", "yoga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Exercises: yoga (10)"))
        .stdout(predicate::str::contains("(strength)").not());
}

#[test]
fn test_cli_exercise_list_no_match() {
    fitplan_cmd()
        .args(["exercise", "list", "--search", "moonwalk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises found."));
}

#[test]
fn test_cli_exercise_show() {
    fitplan_cmd()
        .args(["exercise", "show", "plank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plank"))
        .stdout(predicate::str::contains("- **Category**: core"));
}

#[test]
fn test_cli_exercise_show_unknown() {
    fitplan_cmd()
        .args(["exercise", "show", "Moonwalk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exercise 'Moonwalk' not found"));
}

#[test]
fn test_cli_diet() {
    fitplan_cmd()
        .args(["diet", "--weight", "70", "--height", "175", "--age", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Maintenance Diet"))
        .stdout(predicate::str::contains("- **BMI**: 22.86"))
        .stdout(predicate::str::contains("- **Age**: 30"));
}

#[test]
fn test_cli_diet_rejects_zero_height() {
    fitplan_cmd()
        .args(["diet", "--weight", "70", "--height", "0", "--age", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height_cm"));
}

#[test]
fn test_cli_default_lists_catalog() {
    fitplan_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Exercises (66)"))
        .stdout(predicate::str::contains("- **Push-Ups** (strength)"));
}
