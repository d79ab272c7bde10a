mod constraints;
mod search;
mod types;

pub use types::{ScheduleError, SolveOptions, SolveOutcome, Violation, ViolationKind};

use crate::model::{Employee, Roster, WeekAssignment};
use std::collections::HashSet;

/// Scheduler : encapsule un Roster et pilote la recherche.
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.roster.employees.extend(employees);
    }

    /// Cherche une affectation complète des 21 créneaux de la semaine.
    ///
    /// Parcourt les créneaux dans l'ordre fixe jour-par-jour, postes
    /// [matin, soir, nuit], et retourne la première affectation valide
    /// (aucune optimisation entre solutions faisables). L'infaisabilité
    /// est une issue normale (`SolveOutcome::Infeasible`), pas une erreur.
    pub fn solve(&self, opts: SolveOptions) -> Result<SolveOutcome, ScheduleError> {
        self.validate()?;
        Ok(search::solve(&self.roster, opts))
    }

    /// Contrôle a posteriori : liste toutes les violations des six
    /// contraintes dures sur une affectation donnée.
    pub fn verify(&self, assignment: &WeekAssignment, opts: SolveOptions) -> Vec<Violation> {
        constraints::verify(&self.roster, assignment, opts)
    }

    fn validate(&self) -> Result<(), ScheduleError> {
        if self.roster.employees.is_empty() {
            return Err(ScheduleError::EmptyRoster);
        }
        let mut seen = HashSet::new();
        for e in &self.roster.employees {
            if !seen.insert(e.id.as_str()) {
                return Err(ScheduleError::DuplicateEmployee(e.id.as_str().to_string()));
            }
        }
        Ok(())
    }
}
