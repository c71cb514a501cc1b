//! Crumple CLI — run damage scenarios and inspect saved damage.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod scenario;

#[derive(Parser)]
#[command(name = "crumple")]
#[command(version, about = "Crumple — persistent collision damage for triangle meshes")]
struct Cli {
    /// Logging verbosity level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a damage scenario from a config file.
    Simulate {
        /// Path to scenario config (TOML).
        #[arg(short, long, default_value = "scenario.toml")]
        config: String,

        /// Write a damage snapshot of the final state to this path.
        #[arg(short, long)]
        snapshot: Option<String>,
    },

    /// Inspect a damage snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a scenario, parameter file or mesh.
    Validate {
        /// Path to a scenario/parameter TOML or a mesh JSON file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let result = match cli.command {
        Commands::Simulate { config, snapshot } => {
            commands::simulate(&config, snapshot.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
