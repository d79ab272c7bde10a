use super::{constraints, SolveOptions, SolveOutcome};
use crate::model::{Roster, ShiftKind, WeekAssignment, DAYS_PER_WEEK};

const SLOTS_PER_WEEK: usize = DAYS_PER_WEEK * 3;

/// État muté pendant la recherche, indexé par position d'employé dans
/// le roster. Chaque branche qui échoue est défaite par `undo` : aucune
/// mutation d'une branche abandonnée ne survit (journal d'annulation
/// plutôt que copie par branche, même contrat).
pub(super) struct SearchState {
    pub(super) assignment: WeekAssignment,
    pub(super) hours: Vec<u32>,
    /// Dernier poste tenu : (jour, poste). Sert uniquement à la règle
    /// de repos nuit→matin entre jours consécutifs.
    pub(super) last_shift: Vec<Option<(usize, ShiftKind)>>,
    steps: u64,
}

/// Enregistrement d'annulation d'un engagement tentatif.
struct Undo {
    day: usize,
    kind: ShiftKind,
    e1: usize,
    e2: usize,
    prev1: Option<(usize, ShiftKind)>,
    prev2: Option<(usize, ShiftKind)>,
}

enum Fill {
    Complete,
    Exhausted,
    Budget,
}

pub(super) fn solve(roster: &Roster, opts: SolveOptions) -> SolveOutcome {
    let count = roster.employees.len();
    let mut state = SearchState {
        assignment: WeekAssignment::default(),
        hours: vec![0; count],
        last_shift: vec![None; count],
        steps: 0,
    };

    match fill_slot(roster, opts, &mut state, 0) {
        Fill::Complete => SolveOutcome::Found(state.assignment),
        Fill::Exhausted => SolveOutcome::Infeasible,
        Fill::Budget => SolveOutcome::BudgetExhausted,
    }
}

/// Remplit récursivement le créneau `slot` (0..21), jour-major puis
/// [matin, soir, nuit]. Première paire faisable engagée, retour sur
/// trace si la suite échoue.
fn fill_slot(roster: &Roster, opts: SolveOptions, state: &mut SearchState, slot: usize) -> Fill {
    if slot == SLOTS_PER_WEEK {
        return Fill::Complete;
    }
    let day = slot / 3;
    let kind = ShiftKind::ALL[slot % 3];

    // Candidats par heures croissantes ; le tri stable conserve l'ordre
    // d'entrée à égalité, ce qui rend la recherche déterministe.
    let mut order: Vec<usize> = (0..roster.employees.len()).collect();
    order.sort_by_key(|&i| state.hours[i]);

    for a in 0..order.len() {
        for b in (a + 1)..order.len() {
            let (e1, e2) = (order[a], order[b]);
            if !constraints::pair_ok(roster, opts, state, day, kind, e1, e2) {
                continue;
            }

            if let Some(budget) = opts.max_steps {
                if state.steps >= budget {
                    return Fill::Budget;
                }
            }
            state.steps += 1;

            let undo = commit(roster, opts, state, day, kind, e1, e2);
            match fill_slot(roster, opts, state, slot + 1) {
                Fill::Exhausted => revert(state, opts, undo),
                done => return done,
            }
        }
    }

    Fill::Exhausted
}

fn commit(
    roster: &Roster,
    opts: SolveOptions,
    state: &mut SearchState,
    day: usize,
    kind: ShiftKind,
    e1: usize,
    e2: usize,
) -> Undo {
    let undo = Undo {
        day,
        kind,
        e1,
        e2,
        prev1: state.last_shift[e1],
        prev2: state.last_shift[e2],
    };

    let pair = [
        roster.employees[e1].id.clone(),
        roster.employees[e2].id.clone(),
    ];
    *state.assignment.day_mut(day).slot_mut(kind) = Some(pair);
    state.hours[e1] += opts.hours_per_shift;
    state.hours[e2] += opts.hours_per_shift;
    state.last_shift[e1] = Some((day, kind));
    state.last_shift[e2] = Some((day, kind));
    undo
}

fn revert(state: &mut SearchState, opts: SolveOptions, undo: Undo) {
    *state.assignment.day_mut(undo.day).slot_mut(undo.kind) = None;
    state.hours[undo.e1] -= opts.hours_per_shift;
    state.hours[undo.e2] -= opts.hours_per_shift;
    state.last_shift[undo.e1] = undo.prev1;
    state.last_shift[undo.e2] = undo.prev2;
}
