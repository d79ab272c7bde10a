use crate::model::{EmployeeId, ShiftKind, WeekAssignment};
use thiserror::Error;

/// Options de résolution
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Durée d'un poste en heures.
    pub hours_per_shift: u32,
    /// Plafond horaire hebdomadaire par employé.
    pub max_week_hours: u32,
    /// Budget de recherche : nombre maximal d'affectations tentées.
    /// `None` = illimité (comportement historique).
    pub max_steps: Option<u64>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            hours_per_shift: 8,
            max_week_hours: 80,
            max_steps: None,
        }
    }
}

/// Issue de la recherche. L'infaisabilité est un résultat métier normal,
/// jamais une erreur ; l'épuisement du budget en est distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Found(WeekAssignment),
    Infeasible,
    BudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Poste hors de la disponibilité déclarée de l'employé.
    Unavailable,
    /// Employé affecté deux fois le même jour.
    DoubleBooked,
    /// Matin après une nuit la veille.
    NightToMorning,
    /// Plafond horaire hebdomadaire dépassé.
    OverHourCap,
    /// Paire du matin composée de deux astreintes.
    OnCallPair,
    /// Créneau sans paire complète.
    SlotNotFilled,
    /// Nom absent du roster.
    UnknownEmployee,
}

/// Violation constatée a posteriori sur une affectation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub kind: ViolationKind,
    pub day: usize,
    pub shift: ShiftKind,
    /// Employé concerné ; `None` quand la violation porte sur le créneau.
    pub employee: Option<EmployeeId>,
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
