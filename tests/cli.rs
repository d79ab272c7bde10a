#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("semainier-cli").unwrap()
}

fn write_six_all_available(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("availability.csv");
    let mut content =
        String::from("name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n");
    for name in ["a", "b", "c", "d", "e", "f"] {
        content.push_str(name);
        content.push_str(",yes,yes,yes,yes,yes,yes,yes\n");
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn plan_renders_a_schedule() {
    let dir = tempdir().unwrap();
    let availability = write_six_all_available(dir.path());

    cli()
        .args(["plan", "--availability"])
        .arg(&availability)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee"))
        .stdout(predicate::str::contains("Monday"));
}

#[test]
fn plan_reports_infeasibility_with_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("availability.csv");
    fs::write(
        &path,
        "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n\
         solo,yes,yes,yes,yes,yes,yes,yes\n",
    )
    .unwrap();

    cli()
        .args(["plan", "--availability"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No feasible schedule"));
}

#[test]
fn plan_reports_budget_exhaustion_with_exit_code_3() {
    let dir = tempdir().unwrap();
    let availability = write_six_all_available(dir.path());

    cli()
        .args(["plan", "--max-steps", "1", "--availability"])
        .arg(&availability)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("budget"));
}

#[test]
fn plan_then_check_roundtrip() {
    let dir = tempdir().unwrap();
    let availability = write_six_all_available(dir.path());
    let schedule = dir.path().join("schedule.csv");

    cli()
        .args(["plan", "--no-color", "--availability"])
        .arg(&availability)
        .arg("--out-csv")
        .arg(&schedule)
        .assert()
        .success();

    cli()
        .args(["check", "--availability"])
        .arg(&availability)
        .arg("--schedule")
        .arg(&schedule)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn init_template_writes_a_sheet() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("template.csv");

    cli()
        .args(["init-template", "--out"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("name,monday"));
}
