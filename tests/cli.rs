#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("tournante-cli").unwrap()
}

#[test]
fn generate_from_plan() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"{"year": 2021, "participants": ["Adam", "Berit"],
            "rotations": [{"event": "Indoor", "start": "Adam"},
                          {"event": "Outdoor", "start": "Berit"}]}"#,
    )
    .unwrap();
    let out = dir.path().join("generated");
    fs::create_dir(&out).unwrap();

    cli()
        .args(["generate", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(&out)
        .arg("--json")
        .arg(out.join("roster.json"))
        .assert()
        .success();

    for file in ["Adam.ics", "Berit.ics", "Indoor.csv", "Outdoor.csv", "roster.json"] {
        assert!(out.join(file).is_file(), "{file}");
    }
}

#[test]
fn assign_with_names_skips_ics() {
    let dir = tempdir().unwrap();
    cli()
        .args([
            "assign", "--names", "Adam, Berit,Cecilia", "--year", "2021", "--event", "Dishes",
            "--start", "Cecilia", "--no-ics", "--out",
        ])
        .arg(dir.path())
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("Dishes.csv")).unwrap();
    assert_eq!(csv.lines().count(), 53);
    assert!(csv.contains("Cecilia,01,2021-01-04,2021-01-11"));
    assert!(!dir.path().join("Adam.ics").exists());
}

#[test]
fn unknown_start_fails() {
    let dir = tempdir().unwrap();
    cli()
        .args([
            "assign", "--names", "Adam,Berit", "--year", "2021", "--event", "Dishes", "--start",
            "Nonexistent", "--out",
        ])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nonexistent"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn show_single_week() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"{"year": 2020, "participants": ["A", "B", "C"],
            "rotations": [{"event": "Trash", "start": "C"}]}"#,
    )
    .unwrap();

    cli()
        .args(["show", "--week", "53", "--plan"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("53 | 2020-12-28 → 2021-01-04 | Trash | A"));
}
