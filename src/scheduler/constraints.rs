use super::search::SearchState;
use super::{SolveOptions, Violation, ViolationKind};
use crate::model::{EmployeeId, Roster, ShiftKind, WeekAssignment, DAYS_PER_WEEK};

/// Vérifie les six contraintes dures pour la paire (e1, e2) sur le
/// créneau (day, kind). `e1 != e2` est garanti par l'énumération.
pub(super) fn pair_ok(
    roster: &Roster,
    opts: SolveOptions,
    state: &SearchState,
    day: usize,
    kind: ShiftKind,
    e1: usize,
    e2: usize,
) -> bool {
    if !employee_ok(roster, opts, state, day, kind, e1)
        || !employee_ok(roster, opts, state, day, kind, e2)
    {
        return false;
    }
    // Répartition des astreintes : le premier poste de la journée ne
    // peut pas être tenu par deux astreintes.
    if kind == ShiftKind::Morning
        && roster.employees[e1].on_call
        && roster.employees[e2].on_call
    {
        return false;
    }
    true
}

fn employee_ok(
    roster: &Roster,
    opts: SolveOptions,
    state: &SearchState,
    day: usize,
    kind: ShiftKind,
    idx: usize,
) -> bool {
    let employee = &roster.employees[idx];
    if !employee.can_work(day, kind) {
        return false;
    }
    // Un seul poste par jour.
    if state.assignment.day(day).contains(&employee.id) {
        return false;
    }
    // Repos : pas de matin après une nuit la veille.
    if kind == ShiftKind::Morning && day > 0 {
        if state.last_shift[idx] == Some((day - 1, ShiftKind::Night)) {
            return false;
        }
    }
    // Plafond horaire hebdomadaire.
    if state.hours[idx] + opts.hours_per_shift > opts.max_week_hours {
        return false;
    }
    true
}

/// Contrôle a posteriori d'une affectation, complète ou non : recalcule
/// les six contraintes depuis zéro et liste chaque écart.
pub(super) fn verify(
    roster: &Roster,
    assignment: &WeekAssignment,
    opts: SolveOptions,
) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut hours: Vec<u32> = vec![0; roster.employees.len()];

    for day in 0..DAYS_PER_WEEK {
        let mut seen_today: Vec<&EmployeeId> = Vec::new();

        for kind in ShiftKind::ALL {
            let Some(pair) = assignment.day(day).slot(kind) else {
                out.push(Violation {
                    kind: ViolationKind::SlotNotFilled,
                    day,
                    shift: kind,
                    employee: None,
                });
                continue;
            };

            for id in pair {
                let Some(pos) = roster.employees.iter().position(|e| &e.id == id) else {
                    out.push(Violation {
                        kind: ViolationKind::UnknownEmployee,
                        day,
                        shift: kind,
                        employee: Some(id.clone()),
                    });
                    continue;
                };
                let employee = &roster.employees[pos];

                if !employee.can_work(day, kind) {
                    out.push(Violation {
                        kind: ViolationKind::Unavailable,
                        day,
                        shift: kind,
                        employee: Some(id.clone()),
                    });
                }
                if seen_today.contains(&id) {
                    out.push(Violation {
                        kind: ViolationKind::DoubleBooked,
                        day,
                        shift: kind,
                        employee: Some(id.clone()),
                    });
                }
                seen_today.push(id);

                hours[pos] += opts.hours_per_shift;
                if hours[pos] > opts.max_week_hours
                    && hours[pos] - opts.hours_per_shift <= opts.max_week_hours
                {
                    // signalé une seule fois, au créneau qui fait déborder
                    out.push(Violation {
                        kind: ViolationKind::OverHourCap,
                        day,
                        shift: kind,
                        employee: Some(id.clone()),
                    });
                }
            }

            if kind == ShiftKind::Morning {
                let both_on_call = pair.iter().all(|id| {
                    roster.find_by_id(id).is_some_and(|e| e.on_call)
                });
                if both_on_call {
                    out.push(Violation {
                        kind: ViolationKind::OnCallPair,
                        day,
                        shift: kind,
                        employee: None,
                    });
                }
            }
        }
    }

    // Repos nuit→matin entre jours consécutifs.
    for day in 1..DAYS_PER_WEEK {
        let (Some(night), Some(morning)) = (
            assignment.day(day - 1).slot(ShiftKind::Night),
            assignment.day(day).slot(ShiftKind::Morning),
        ) else {
            continue;
        };
        for id in morning {
            if night.contains(id) {
                out.push(Violation {
                    kind: ViolationKind::NightToMorning,
                    day,
                    shift: ShiftKind::Morning,
                    employee: Some(id.clone()),
                });
            }
        }
    }

    out
}
