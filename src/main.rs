//! Mavex patient monitoring dashboard
//!
//! Main entry point for the Mavex command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use mavex::actions::{self, notice, Dispatcher, LoggingNotifier, Registrar};
use mavex::models::patient::PatientId;
use mavex::ui::text::{DashboardView, PatientView, SidebarView};
use mavex::{config, reduce, telemetry, Action, DashboardState, Roster, VitalsGenerator};

#[derive(Parser)]
#[command(name = "mavex", about = "Patient monitoring dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Seed for the synthetic vitals; overrides configuration
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// JSON roster file to use instead of the built-in patients
    #[arg(long, global = true)]
    roster: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients, optionally filtered by name
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one patient's details and vitals charts
    Show {
        id: PatientId,
        #[arg(long)]
        json: bool,
    },
    /// Render the full dashboard
    Dashboard {
        #[arg(long)]
        patient: Option<PatientId>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        hide_sidebar: bool,
    },
    /// Trigger an emergency action
    Call {
        #[command(subcommand)]
        kind: CallKind,
    },
    /// Open the patient registration form
    AddPatient,
    /// Open the desktop dashboard
    #[cfg(feature = "desktop")]
    Desktop,
}

#[derive(Subcommand)]
enum CallKind {
    /// Call the patient's emergency contact
    Emergency { id: PatientId },
    /// Dispatch an ambulance
    Ambulance,
    /// Raise an SOS alert for the patient
    Sos { id: PatientId },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config().context("Failed to load configuration")?;
    telemetry::init(&config.logging);

    let mut generator = VitalsGenerator::from_seed_option(cli.seed.or(config.dashboard.seed));
    let roster = match cli.roster.or(config.dashboard.roster_path) {
        Some(path) => Roster::from_file(&path, &mut generator)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => Roster::builtin(&mut generator).context("Failed to build patient roster")?,
    };
    info!(patients = roster.len(), "dashboard ready");

    let state = DashboardState::initial(&roster).with_sidebar(config.dashboard.sidebar_visible);
    let notifier = LoggingNotifier;

    match cli.command {
        Commands::List { search, json } => {
            let state = reduce(&state, Action::Search(search), &roster);
            if json {
                let patients = state.visible_patients(&roster);
                println!("{}", serde_json::to_string_pretty(&patients)?);
            } else {
                print!("{}", SidebarView { state: &state, roster: &roster });
            }
        }
        Commands::Show { id, json } => {
            let patient = roster.require(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(patient)?);
            } else {
                print!("{}", PatientView { patient });
            }
        }
        Commands::Dashboard { patient, search, hide_sidebar } => {
            let mut state = reduce(&state, Action::Search(search), &roster);
            if let Some(id) = patient {
                state = select(&state, id, &roster)?;
            }
            if hide_sidebar {
                state = reduce(&state, Action::HideSidebar, &roster);
            }
            print!("{}", DashboardView { state: &state, roster: &roster });
        }
        Commands::Call { kind } => {
            let shown = match kind {
                CallKind::Emergency { id } => {
                    let state = select(&state, id, &roster)?;
                    actions::emergency_call(&state, &roster, &notifier)
                }
                CallKind::Ambulance => Some(notice(notifier.ambulance_call())),
                CallKind::Sos { id } => {
                    let state = select(&state, id, &roster)?;
                    actions::sos_alert(&state, &roster, &notifier)
                }
            };
            if let Some(shown) = shown {
                println!("{shown}");
            }
        }
        Commands::AddPatient => println!("{}", notice(notifier.open_registration())),
        #[cfg(feature = "desktop")]
        Commands::Desktop => {
            mavex::ui::desktop::run(roster, state.sidebar_visible)
                .context("Desktop dashboard exited with an error")?;
        }
    }
    Ok(())
}

fn select(state: &DashboardState, id: PatientId, roster: &Roster) -> Result<DashboardState> {
    roster.require(id)?;
    Ok(reduce(state, Action::SelectPatient(id), roster))
}
