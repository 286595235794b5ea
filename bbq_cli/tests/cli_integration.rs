use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn help_lists_the_three_subcommands() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("hold"));
}

#[test]
fn predict_without_required_flags_fails_with_usage_error() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args(["predict"]);
    cmd.assert().failure().code(2);
}

#[test]
fn predict_prints_ordered_percentiles() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args([
        "predict",
        "--cut",
        "brisket",
        "--equipment",
        "offset",
        "--target-f",
        "203",
        "--n-iterations",
        "100",
        "--seed",
        "7",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("P10:"))
        .stdout(predicate::str::contains("P50:"))
        .stdout(predicate::str::contains("P90:"));
}

#[test]
fn predict_json_mode_emits_a_single_json_line() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args([
        "--json",
        "predict",
        "--cut",
        "pork-butt",
        "--equipment",
        "pellet",
        "--target-f",
        "203",
        "--n-iterations",
        "50",
        "--seed",
        "3",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"p50_minutes\""));
}

#[test]
fn hold_reports_a_carryover_peak() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args(["hold", "--pull-temp-f", "203"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("carryover peak"));
}

#[test]
fn predict_honors_equipment_overrides_from_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("bbqcast.toml");
    let mut config_file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        config_file,
        r#"
        [monte_carlo]
        n_iterations = 100
        initial_iterations = 20
        seed = 9

        [equipment_overrides]
        offset = 20.0
        "#
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args([
        "--config",
        config_path.to_str().unwrap(),
        "predict",
        "--cut",
        "brisket",
        "--equipment",
        "offset",
        "--target-f",
        "203",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("P50:"));
}

#[test]
fn plan_rejects_an_unparseable_dinner_time() {
    let mut cmd = Command::cargo_bin("bbqcast").unwrap();
    cmd.args([
        "plan",
        "--cut",
        "brisket",
        "--equipment",
        "offset",
        "--target-f",
        "203",
        "--dinner-time",
        "not-a-date",
    ]);
    cmd.assert().failure();
}
