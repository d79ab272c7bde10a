use crate::model::{
    Employee, EmployeeId, Roster, ShiftKind, ShiftSet, WeekAssignment, DAYS_PER_WEEK, DAY_NAMES,
};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Résultat d'import de la feuille de disponibilité.
#[derive(Debug, Clone)]
pub struct AvailabilityImport {
    pub employees: Vec<Employee>,
    /// Cellules non reconnues, converties en « indisponible ». À
    /// remonter à l'utilisateur : perte de données silencieuse sinon.
    pub unrecognized_cells: usize,
}

/// Import de disponibilité depuis CSV : header `name,monday,...,sunday`,
/// une ligne par employé. Un nom manquant ou vide est fatal ; une
/// cellule non reconnue vaut « indisponible » et est comptée.
pub fn import_availability_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<AvailabilityImport> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut employees = Vec::new();
    let mut unrecognized = 0usize;

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec
            .get(0)
            .with_context(|| format!("row {}: missing name column", row + 1))?
            .trim();
        if name.is_empty() {
            bail!("row {}: empty employee name", row + 1);
        }

        let mut availability = [ShiftSet::EMPTY; DAYS_PER_WEEK];
        for (day, slot) in availability.iter_mut().enumerate() {
            let cell = rec
                .get(day + 1)
                .with_context(|| format!("row {} ({name}): missing {} column", row + 1, DAY_NAMES[day]))?;
            match ShiftSet::parse_cell(cell) {
                Some(set) => *slot = set,
                None => {
                    unrecognized += 1;
                }
            }
        }
        employees.push(Employee::new(name, availability));
    }

    Ok(AvailabilityImport {
        employees,
        unrecognized_cells: unrecognized,
    })
}

/// Export CSV de l'horaire : matrice employé × jour, header
/// `employee,monday,...,sunday`, cellule = nom du poste ou vide.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    assignment: &WeekAssignment,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    let mut header = vec!["employee".to_string()];
    header.extend(DAY_NAMES.iter().map(|d| d.to_ascii_lowercase()));
    w.write_record(&header)?;

    for e in &roster.employees {
        let mut record = vec![e.id.as_str().to_string()];
        for day in 0..DAYS_PER_WEEK {
            let cell = assignment
                .shift_for(&e.id, day)
                .map(|k| k.as_str().to_string())
                .unwrap_or_default();
            record.push(cell);
        }
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

/// Relit une matrice exportée par [`export_schedule_csv`]. Un créneau
/// doit porter exactement deux noms ou aucun ; tout autre compte est
/// une entrée malformée, donc fatale.
pub fn import_schedule_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<WeekAssignment> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    // (jour, poste) → noms rencontrés, dans l'ordre des lignes
    let mut cells: Vec<Vec<EmployeeId>> = vec![Vec::new(); DAYS_PER_WEEK * 3];

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec
            .get(0)
            .with_context(|| format!("row {}: missing employee column", row + 1))?
            .trim();
        if name.is_empty() {
            bail!("row {}: empty employee name", row + 1);
        }
        for day in 0..DAYS_PER_WEEK {
            let cell = rec
                .get(day + 1)
                .with_context(|| format!("row {} ({name}): missing {} column", row + 1, DAY_NAMES[day]))?
                .trim();
            if cell.is_empty() {
                continue;
            }
            let Some(kind) = ShiftKind::parse(cell) else {
                bail!("row {} ({name}): unknown shift {cell:?}", row + 1);
            };
            let slot = day * 3 + kind as usize;
            cells[slot].push(EmployeeId::new(name));
        }
    }

    let mut assignment = WeekAssignment::default();
    for day in 0..DAYS_PER_WEEK {
        for kind in ShiftKind::ALL {
            let names = &cells[day * 3 + kind as usize];
            match names.as_slice() {
                [] => {}
                [a, b] => {
                    *assignment.day_mut(day).slot_mut(kind) = Some([a.clone(), b.clone()]);
                }
                other => bail!(
                    "{} {}: expected two assignees, found {}",
                    DAY_NAMES[day],
                    kind,
                    other.len()
                ),
            }
        }
    }
    Ok(assignment)
}

/// Export JSON de l'horaire (écriture atomique, jolie mise en forme).
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    assignment: &WeekAssignment,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(assignment)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

/// Écrit une feuille de disponibilité vierge (header + lignes d'exemple).
pub fn export_availability_template<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    let mut header = vec!["name".to_string()];
    header.extend(DAY_NAMES.iter().map(|d| d.to_ascii_lowercase()));
    w.write_record(&header)?;
    w.write_record(["alice", "yes", "yes", "morning/evening", "yes", "yes", "no", "night"])?;
    w.write_record(["bob", "all-day", "no", "yes", "evening", "yes", "yes", "yes"])?;
    w.flush()?;
    Ok(())
}
