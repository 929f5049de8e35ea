use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/flights.csv")
        .canonicalize()
        .expect("fixture flight data present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flightpath-cli");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("FLIGHTPATH_DATA");
    cmd
}

#[test]
fn airports_lists_unique_codes_in_load_order() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .arg("airports")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Airports (9):\n - MSN\n - ORD\n - DTW\n"))
        .stdout(predicate::str::contains(" - FAI"));
}

#[test]
fn data_path_can_come_from_environment() {
    cli()
        .env("FLIGHTPATH_DATA", fixture_path())
        .arg("airports")
        .assert()
        .success()
        .stdout(predicate::str::contains("Airports (9):"));
}

#[test]
fn stats_reports_counts_and_extremes() {
    cli()
        .arg("--data")
        .arg(fixture_path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Airports: 9"))
        .stdout(predicate::str::contains("Flights:  14"))
        .stdout(predicate::str::contains("Cheapest flight        MSN -> MSP  $90.00"))
        .stdout(predicate::str::contains("Most expensive flight  DTW -> LAX  $330.00"))
        .stdout(predicate::str::contains("Shortest flight        MSN -> ORD  $120.00  109 mi"))
        .stdout(predicate::str::contains("Longest flight         JFK -> LAX  $280.00  2,475 mi"));
}

#[test]
fn stats_json_flattens_extremes() {
    let output = cli()
        .arg("--data")
        .arg(fixture_path())
        .arg("stats")
        .arg("--format")
        .arg("json")
        .output()
        .expect("run stats command");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["airports"], 9);
    assert_eq!(value["flights"], 14);
    assert_eq!(value["cheapest"]["destination"], "MSP");
    assert_eq!(value["longest"]["distance"], 2475.0);
}

#[test]
fn stats_on_empty_file_fails() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("empty.csv");
    fs::write(&path, "garbage line\n").expect("write data file");

    cli()
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot compute statistics"));
}

#[test]
fn loader_warnings_go_to_stderr() {
    cli()
        .env("RUST_LOG", "warn")
        .arg("--data")
        .arg(fixture_path())
        .arg("airports")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping").not())
        .stderr(predicate::str::contains("skipping flight row"));
}

#[test]
fn missing_data_argument_is_reported() {
    cli()
        .arg("airports")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no flight data file given"));
}

#[test]
fn missing_data_file_is_reported() {
    let temp = tempdir().expect("create temp dir");
    cli()
        .arg("--data")
        .arg(temp.path().join("absent.csv"))
        .arg("airports")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load flight data"));
}
