#![forbid(unsafe_code)]
use semainier::{ShiftKind, ShiftSet};

#[test]
fn single_shift_names() {
    for kind in ShiftKind::ALL {
        let set = ShiftSet::parse_cell(kind.as_str()).unwrap();
        assert!(set.contains(kind));
        assert_eq!(set.iter().count(), 1);
    }
    // casse et espaces tolérés
    let set = ShiftSet::parse_cell("  Night ").unwrap();
    assert_eq!(set, ShiftSet::from_kinds(&[ShiftKind::Night]));
}

#[test]
fn yes_and_all_day_expand_to_all_three() {
    assert_eq!(ShiftSet::parse_cell("yes"), Some(ShiftSet::all()));
    assert_eq!(ShiftSet::parse_cell("All-Day"), Some(ShiftSet::all()));
}

#[test]
fn pairings_are_order_insensitive() {
    let expected = ShiftSet::from_kinds(&[ShiftKind::Evening, ShiftKind::Night]);
    assert_eq!(ShiftSet::parse_cell("evening/night"), Some(expected));
    assert_eq!(ShiftSet::parse_cell("night/evening"), Some(expected));

    let expected = ShiftSet::from_kinds(&[ShiftKind::Morning, ShiftKind::Evening]);
    assert_eq!(ShiftSet::parse_cell("Morning / Evening"), Some(expected));
}

#[test]
fn no_is_recognized_as_empty() {
    assert_eq!(ShiftSet::parse_cell("no"), Some(ShiftSet::EMPTY));
}

#[test]
fn unrecognized_values_are_flagged() {
    assert_eq!(ShiftSet::parse_cell("maybe"), None);
    assert_eq!(ShiftSet::parse_cell(""), None);
    // un poste répété n'est pas une paire valide
    assert_eq!(ShiftSet::parse_cell("morning/morning"), None);
    assert_eq!(ShiftSet::parse_cell("morning/later"), None);
}
