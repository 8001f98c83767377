#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tournante::{
    calendar::CalendarExporter,
    io,
    model::{roster_from_names, Participant},
    plan::{load_plan_from_file, RotationPlan, RotationSpec},
    scheduler::last_week,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tâches tournantes (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct Outputs {
    /// Dossier de sortie (doit exister)
    #[arg(long)]
    out: PathBuf,
    /// Ne pas générer les fichiers .ics
    #[arg(long)]
    no_ics: bool,
    /// Ne pas générer les fichiers .csv
    #[arg(long)]
    no_csv: bool,
    /// Export JSON du roster annoté (optionnel)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Appliquer un plan JSON et exporter les fichiers
    Generate {
        #[arg(long)]
        plan: PathBuf,
        #[command(flatten)]
        outputs: Outputs,
    },

    /// Assigner une seule tâche
    Assign {
        /// CSV de participants (header `name`)
        #[arg(long, conflicts_with = "names")]
        people: Option<PathBuf>,
        /// liste "nom1,nom2,..."
        #[arg(long)]
        names: Option<String>,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        event: String,
        /// Participant qui prend la semaine 1
        #[arg(long)]
        start: String,
        #[command(flatten)]
        outputs: Outputs,
    },

    /// Afficher le planning semaine par semaine
    Show {
        #[arg(long)]
        plan: PathBuf,
        /// Limiter à une semaine ISO
        #[arg(long)]
        week: Option<u32>,
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

    match cli.cmd {
        Commands::Generate { plan, outputs } => {
            let plan = load_plan_from_file(&plan)?;
            let roster = plan.apply()?;
            export(&roster, &outputs)?;
        }
        Commands::Assign {
            people,
            names,
            year,
            event,
            start,
            outputs,
        } => {
            let roster: Vec<Participant> = match (people, names) {
                (Some(path), _) => io::import_participants_csv(path)?,
                (None, Some(list)) => roster_from_names(
                    list.split(',').map(str::trim).filter(|s| !s.is_empty()),
                ),
                (None, None) => bail!("either --people or --names is required"),
            };
            let plan = RotationPlan {
                year,
                participants: roster.iter().map(|p| p.name.clone()).collect(),
                rotations: vec![RotationSpec { event, start }],
            };
            let roster = plan.apply()?;
            export(&roster, &outputs)?;
        }
        Commands::Show { plan, week } => {
            let plan = load_plan_from_file(&plan)?;
            let roster = plan.apply()?;
            let weeks = last_week(plan.year)?;
            if let Some(w) = week {
                if w == 0 || w > weeks {
                    bail!("week {w} is out of range 1..={weeks} for {}", plan.year);
                }
            }
            for w in (1..=weeks).filter(|w| week.map_or(true, |only| only == *w)) {
                for spec in &plan.rotations {
                    let owner = roster
                        .iter()
                        .find_map(|p| {
                            p.events_named(&spec.event)
                                .find(|e| e.iso_week() == w)
                                .map(|e| (p.name.as_str(), e))
                        })
                        .with_context(|| format!("week {w} of {} unassigned", spec.event))?;
                    println!(
                        "{w:02} | {} → {} | {} | {}",
                        owner.1.start, owner.1.end, spec.event, owner.0
                    );
                }
            }
        }
    }

    Ok(())
}

fn export(roster: &[Participant], outputs: &Outputs) -> Result<()> {
    if !outputs.out.is_dir() {
        bail!("output directory {} does not exist", outputs.out.display());
    }
    if !outputs.no_ics {
        CalendarExporter::new().write_all(roster, &outputs.out)?;
    }
    if !outputs.no_csv {
        io::generate_tables(roster, &outputs.out)?;
    }
    if let Some(path) = &outputs.json {
        io::export_roster_json(path, roster)?;
    }
    Ok(())
}
