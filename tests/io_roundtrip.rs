#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use semainier::{
    io, Employee, Scheduler, ShiftKind, ShiftSet, SolveOptions, SolveOutcome, WeekAssignment,
    DAYS_PER_WEEK,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_availability_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("availability.csv");
    fs::write(
        &path,
        "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n\
         alice,yes,no,morning,evening/night,all-day,no,night\n\
         bob,wat,yes,yes,yes,yes,yes,yes\n",
    )
    .unwrap();

    let import = io::import_availability_csv(&path).unwrap();
    assert_eq!(import.employees.len(), 2);
    // cellule "wat" non reconnue : indisponible, mais comptée
    assert_eq!(import.unrecognized_cells, 1);

    let alice = &import.employees[0];
    assert_eq!(alice.id.as_str(), "alice");
    assert_eq!(alice.availability[0], ShiftSet::all());
    assert_eq!(alice.availability[1], ShiftSet::EMPTY);
    assert_eq!(
        alice.availability[2],
        ShiftSet::from_kinds(&[ShiftKind::Morning])
    );
    assert_eq!(
        alice.availability[3],
        ShiftSet::from_kinds(&[ShiftKind::Evening, ShiftKind::Night])
    );

    let bob = &import.employees[1];
    assert_eq!(bob.availability[0], ShiftSet::EMPTY);
    assert_eq!(bob.availability[1], ShiftSet::all());
}

#[test]
fn missing_name_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("availability.csv");
    fs::write(
        &path,
        "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n\
         ,yes,yes,yes,yes,yes,yes,yes\n",
    )
    .unwrap();

    assert!(io::import_availability_csv(&path).is_err());
}

#[test]
fn schedule_csv_roundtrip_passes_verification() {
    let mut s = Scheduler::new();
    s.add_employees(all_available(&["a", "b", "c", "d", "e", "f"]));
    let SolveOutcome::Found(assignment) = s.solve(SolveOptions::default()).unwrap() else {
        panic!("expected a complete schedule");
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    io::export_schedule_csv(&path, s.roster(), &assignment).unwrap();

    let reread = io::import_schedule_csv(&path).unwrap();
    assert!(reread.is_complete());
    assert!(s.verify(&reread, SolveOptions::default()).is_empty());
}

#[test]
fn schedule_json_export_roundtrip() {
    let mut s = Scheduler::new();
    s.add_employees(all_available(&["a", "b", "c", "d", "e", "f"]));
    let SolveOutcome::Found(assignment) = s.solve(SolveOptions::default()).unwrap() else {
        panic!("expected a complete schedule");
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    io::export_schedule_json(&path, &assignment).unwrap();

    let data = fs::read_to_string(&path).unwrap();
    let reread: WeekAssignment = serde_json::from_str(&data).unwrap();
    assert_eq!(reread, assignment);
}

#[test]
fn malformed_slot_count_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    // un seul nom sur le créneau du lundi matin
    fs::write(
        &path,
        "employee,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n\
         a,morning,,,,,,\n",
    )
    .unwrap();

    assert!(io::import_schedule_csv(&path).is_err());
}

fn all_available(names: &[&str]) -> Vec<Employee> {
    names
        .iter()
        .map(|n| Employee::new(*n, [ShiftSet::all(); DAYS_PER_WEEK]))
        .collect()
}
