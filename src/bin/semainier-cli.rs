#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use semainier::{
    io,
    model::EmployeeId,
    render::{ScheduleRenderer, TableRenderer},
    scheduler::{Scheduler, SolveOptions, SolveOutcome},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Politique héritée : sans `--on-call`, les 4 derniers employés de la
/// feuille sont d'astreinte.
const DEFAULT_ON_CALL_COUNT: usize = 4;

/// CLI minimaliste de planification hebdomadaire (sans base de données)
///
/// Codes de sortie : 0 = horaire produit ; 2 = aucun horaire faisable
/// (ou violations au `check`) ; 3 = budget de recherche épuisé.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer la disponibilité, résoudre la semaine, afficher/exporter
    Plan {
        /// CSV de disponibilité (`name,monday,...,sunday`)
        #[arg(long)]
        availability: String,

        /// liste "name1,name2,..." des astreintes (défaut : 4 derniers)
        #[arg(long)]
        on_call: Option<String>,

        #[arg(long, default_value_t = 80)]
        max_week_hours: u32,

        /// Budget de recherche (affectations tentées) ; illimité sinon
        #[arg(long)]
        max_steps: Option<u64>,

        #[arg(long)]
        out_csv: Option<String>,

        #[arg(long)]
        out_json: Option<String>,

        /// Tableau sans couleurs
        #[arg(long)]
        no_color: bool,
    },

    /// Revérifier un horaire exporté contre une feuille de disponibilité
    Check {
        #[arg(long)]
        availability: String,

        /// CSV d'horaire produit par `plan --out-csv`
        #[arg(long)]
        schedule: String,

        #[arg(long)]
        on_call: Option<String>,
    },

    /// Écrire une feuille de disponibilité vierge
    InitTemplate {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.log;

    let code = match cli.cmd {
        Commands::Plan {
            availability,
            on_call,
            max_week_hours,
            max_steps,
            out_csv,
            out_json,
            no_color,
        } => {
            let import = io::import_availability_csv(&availability)?;
            if import.unrecognized_cells > 0 {
                eprintln!(
                    "Warning: {} unrecognized availability cell(s) treated as unavailable",
                    import.unrecognized_cells
                );
            }

            let mut scheduler = Scheduler::new();
            scheduler.add_employees(import.employees);
            apply_on_call(&mut scheduler, on_call.as_deref())?;

            let opts = SolveOptions {
                max_week_hours,
                max_steps,
                ..SolveOptions::default()
            };

            match scheduler.solve(opts)? {
                SolveOutcome::Found(assignment) => {
                    if let Some(path) = out_csv {
                        io::export_schedule_csv(path, scheduler.roster(), &assignment)?;
                    }
                    if let Some(path) = out_json {
                        io::export_schedule_json(path, &assignment)?;
                    }
                    let renderer = TableRenderer { color: !no_color };
                    print!("{}", renderer.render(scheduler.roster(), &assignment));
                    0
                }
                SolveOutcome::Infeasible => {
                    eprintln!("No feasible schedule for this availability");
                    2
                }
                SolveOutcome::BudgetExhausted => {
                    eprintln!("Search budget exhausted before a schedule was found");
                    3
                }
            }
        }

        Commands::Check {
            availability,
            schedule,
            on_call,
        } => {
            let import = io::import_availability_csv(&availability)?;
            let mut scheduler = Scheduler::new();
            scheduler.add_employees(import.employees);
            apply_on_call(&mut scheduler, on_call.as_deref())?;

            let assignment = io::import_schedule_csv(&schedule)?;
            let violations = scheduler.verify(&assignment, SolveOptions::default());
            if violations.is_empty() {
                println!("OK: schedule satisfies all constraints");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    let who = v
                        .employee
                        .as_ref()
                        .map(|id| id.as_str().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    eprintln!(
                        "{} {} | {} | {:?}",
                        semainier::DAY_NAMES[v.day],
                        v.shift,
                        who,
                        v.kind
                    );
                }
                2
            }
        }

        Commands::InitTemplate { out } => {
            io::export_availability_template(&out)?;
            println!("Template written to {out}");
            0
        }
    };

    std::process::exit(code);
}

fn apply_on_call(scheduler: &mut Scheduler, list: Option<&str>) -> Result<()> {
    match list {
        Some(raw) => {
            let ids: Vec<EmployeeId> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(EmployeeId::new)
                .collect();
            scheduler
                .roster_mut()
                .set_on_call(&ids)
                .map_err(anyhow::Error::msg)?;
        }
        None => scheduler
            .roster_mut()
            .mark_trailing_on_call(DEFAULT_ON_CALL_COUNT),
    }
    Ok(())
}
