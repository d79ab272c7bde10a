use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nombre de jours planifiés (semaine pleine, lundi en tête).
pub const DAYS_PER_WEEK: usize = 7;

/// Noms des jours, dans l'ordre de planification.
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Poste quotidien. L'ordre de `ALL` est l'ordre de remplissage des créneaux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftKind {
    Morning,
    Evening,
    Night,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Evening, ShiftKind::Night];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Evening => "evening",
            ShiftKind::Night => "night",
        }
    }

    /// Parse un nom de poste (insensible à la casse).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(ShiftKind::Morning),
            "evening" => Some(ShiftKind::Evening),
            "night" => Some(ShiftKind::Night),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            ShiftKind::Morning => 0b001,
            ShiftKind::Evening => 0b010,
            ShiftKind::Night => 0b100,
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sous-ensemble des trois postes, pour un employé et un jour donnés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftSet(u8);

impl ShiftSet {
    pub const EMPTY: ShiftSet = ShiftSet(0);

    pub fn all() -> Self {
        ShiftSet(0b111)
    }

    pub fn from_kinds(kinds: &[ShiftKind]) -> Self {
        let mut set = ShiftSet::EMPTY;
        for k in kinds {
            set.insert(*k);
        }
        set
    }

    pub fn insert(&mut self, kind: ShiftKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(self, kind: ShiftKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = ShiftKind> {
        ShiftKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// Interprète une cellule de disponibilité.
    ///
    /// Valeurs reconnues (insensibles à la casse, espaces tolérés) :
    /// - un nom de poste → ce seul poste ;
    /// - `yes` / `all-day` → les trois postes ;
    /// - `a/b` (deux postes distincts, ordre indifférent) → ces deux postes ;
    /// - `no` → aucun poste.
    ///
    /// Retourne `None` pour toute valeur non reconnue ; l'appelant la
    /// traite comme « indisponible » sans faire échouer l'import.
    pub fn parse_cell(raw: &str) -> Option<Self> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "yes" | "all-day" => return Some(ShiftSet::all()),
            "no" => return Some(ShiftSet::EMPTY),
            _ => {}
        }
        if let Some(kind) = ShiftKind::parse(&value) {
            return Some(ShiftSet::from_kinds(&[kind]));
        }
        if let Some((left, right)) = value.split_once('/') {
            if let (Some(a), Some(b)) = (ShiftKind::parse(left), ShiftKind::parse(right)) {
                if a != b {
                    return Some(ShiftSet::from_kinds(&[a, b]));
                }
            }
        }
        None
    }
}

/// Identifiant fort pour Employee (le nom, unique par roster).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé : disponibilité par jour, indicateur d'astreinte.
/// Construit une fois, jamais modifié pendant la recherche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub availability: [ShiftSet; DAYS_PER_WEEK],
    pub on_call: bool,
}

impl Employee {
    pub fn new<S: AsRef<str>>(name: S, availability: [ShiftSet; DAYS_PER_WEEK]) -> Self {
        Self {
            id: EmployeeId::new(name),
            availability,
            on_call: false,
        }
    }

    pub fn can_work(&self, day: usize, kind: ShiftKind) -> bool {
        self.availability[day].contains(kind)
    }
}

/// Roster complet. L'ordre de `employees` est l'ordre d'entrée : il fixe
/// le départage des égalités de tri et la politique d'astreinte par défaut.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn find_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.id.as_str() == name)
    }

    /// Marque d'astreinte exactement les employés nommés, efface les autres.
    pub fn set_on_call(&mut self, names: &[EmployeeId]) -> Result<(), String> {
        for name in names {
            if self.find_by_id(name).is_none() {
                return Err(format!("unknown employee: {name}"));
            }
        }
        for e in &mut self.employees {
            e.on_call = names.contains(&e.id);
        }
        Ok(())
    }

    /// Politique héritée : les `count` derniers employés dans l'ordre
    /// d'entrée sont d'astreinte (moins si le roster est plus petit).
    pub fn mark_trailing_on_call(&mut self, count: usize) {
        let total = self.employees.len();
        let from = total.saturating_sub(count);
        for (idx, e) in self.employees.iter_mut().enumerate() {
            e.on_call = idx >= from;
        }
    }
}

/// Paire ordonnée d'employés affectée à un créneau.
pub type ShiftPair = [EmployeeId; 2];

/// Affectation d'une journée : au plus une paire par poste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayAssignment {
    pub morning: Option<ShiftPair>,
    pub evening: Option<ShiftPair>,
    pub night: Option<ShiftPair>,
}

impl DayAssignment {
    pub fn slot(&self, kind: ShiftKind) -> Option<&ShiftPair> {
        match kind {
            ShiftKind::Morning => self.morning.as_ref(),
            ShiftKind::Evening => self.evening.as_ref(),
            ShiftKind::Night => self.night.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, kind: ShiftKind) -> &mut Option<ShiftPair> {
        match kind {
            ShiftKind::Morning => &mut self.morning,
            ShiftKind::Evening => &mut self.evening,
            ShiftKind::Night => &mut self.night,
        }
    }

    /// Vrai si l'employé travaille déjà ce jour-là, tous postes confondus.
    pub fn contains(&self, id: &EmployeeId) -> bool {
        ShiftKind::ALL
            .iter()
            .filter_map(|k| self.slot(*k))
            .any(|pair| pair.contains(id))
    }
}

/// Affectation de la semaine : jour → poste → paire.
/// Invariant (tant que valide) : un employé apparaît au plus une fois
/// par jour, tous postes confondus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekAssignment {
    days: [DayAssignment; DAYS_PER_WEEK],
}

impl WeekAssignment {
    pub fn day(&self, day: usize) -> &DayAssignment {
        &self.days[day]
    }

    pub fn day_mut(&mut self, day: usize) -> &mut DayAssignment {
        &mut self.days[day]
    }

    /// Poste tenu par `id` le jour `day`, s'il y en a un.
    pub fn shift_for(&self, id: &EmployeeId, day: usize) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|k| self.days[day].slot(*k).is_some_and(|pair| pair.contains(id)))
    }

    /// Vrai quand les 21 créneaux sont remplis.
    pub fn is_complete(&self) -> bool {
        self.days
            .iter()
            .all(|d| ShiftKind::ALL.iter().all(|k| d.slot(*k).is_some()))
    }
}
