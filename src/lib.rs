#![forbid(unsafe_code)]
//! Semainier — planification hebdomadaire des trois postes quotidiens (sans BD).
//!
//! - Entrées/sorties fichiers (CSV/JSON).
//! - Recherche en profondeur avec retour sur trace, première solution valide.
//! - Règle de repos nuit→matin, plafond horaire, répartition des astreintes.
//! - Déterministe : mêmes entrées, même horaire.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;

pub use model::{
    DayAssignment, Employee, EmployeeId, Roster, ShiftKind, ShiftPair, ShiftSet, WeekAssignment,
    DAYS_PER_WEEK, DAY_NAMES,
};
pub use render::{ScheduleRenderer, TableRenderer};
pub use scheduler::{
    ScheduleError, Scheduler, SolveOptions, SolveOutcome, Violation, ViolationKind,
};
