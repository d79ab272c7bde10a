use crate::model::{Roster, ShiftKind, WeekAssignment, DAYS_PER_WEEK, DAY_NAMES};
use colored::Colorize;

/// Permet de customiser le rendu de l'horaire (terminal, mail, etc.).
pub trait ScheduleRenderer {
    fn render(&self, roster: &Roster, assignment: &WeekAssignment) -> String;
}

/// Tableau employé × jour pour terminal : colonnes ajustées au contenu,
/// une couleur par poste (matin jaune, soir bleu, nuit rouge), tiret
/// atténué pour les jours non travaillés.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    pub color: bool,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self { color: true }
    }
}

const BLANK: &str = "-";

fn label(kind: ShiftKind) -> &'static str {
    match kind {
        ShiftKind::Morning => "Morning",
        ShiftKind::Evening => "Evening",
        ShiftKind::Night => "Night",
    }
}

impl TableRenderer {
    fn paint(&self, padded: String, kind: Option<ShiftKind>) -> String {
        if !self.color {
            return padded;
        }
        match kind {
            Some(ShiftKind::Morning) => padded.yellow().to_string(),
            Some(ShiftKind::Evening) => padded.blue().to_string(),
            Some(ShiftKind::Night) => padded.red().to_string(),
            None => padded.dimmed().to_string(),
        }
    }
}

impl ScheduleRenderer for TableRenderer {
    fn render(&self, roster: &Roster, assignment: &WeekAssignment) -> String {
        // Cellules brutes d'abord : les largeurs se calculent hors
        // séquences d'échappement couleur.
        let cells: Vec<Vec<Option<ShiftKind>>> = roster
            .employees
            .iter()
            .map(|e| {
                (0..DAYS_PER_WEEK)
                    .map(|day| assignment.shift_for(&e.id, day))
                    .collect()
            })
            .collect();

        let mut widths = [0usize; DAYS_PER_WEEK + 1];
        widths[0] = "Employee"
            .len()
            .max(roster.employees.iter().map(|e| e.id.as_str().len()).max().unwrap_or(0));
        for day in 0..DAYS_PER_WEEK {
            let content = cells
                .iter()
                .map(|row| row[day].map_or(BLANK.len(), |k| label(k).len()))
                .max()
                .unwrap_or(0);
            widths[day + 1] = DAY_NAMES[day].len().max(content);
        }

        let mut out = String::new();

        let mut header = vec![format!("{:<w$}", "Employee", w = widths[0])];
        for day in 0..DAYS_PER_WEEK {
            header.push(format!("{:<w$}", DAY_NAMES[day], w = widths[day + 1]));
        }
        out.push_str(&header.join(" | "));
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 3 * DAYS_PER_WEEK;
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for (e, row) in roster.employees.iter().zip(&cells) {
            let mut line = vec![format!("{:<w$}", e.id.as_str(), w = widths[0])];
            for (day, kind) in row.iter().enumerate() {
                let text = kind.map_or(BLANK, label);
                let padded = format!("{:<w$}", text, w = widths[day + 1]);
                line.push(self.paint(padded, *kind));
            }
            out.push_str(&line.join(" | "));
            out.push('\n');
        }

        out
    }
}
