use clap::{Parser, Subcommand};
use habitrack_core::storage::data_dir;
use habitrack_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "habitrack-cli", version, about = "habitrack CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's habits (same as `habit list`)
    Show,
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Navigate the app date
    Date {
        #[command(subcommand)]
        action: commands::date::DateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr. `HABITRACK_LOG` overrides the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("HABITRACK_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir()?;
    let config = Config::load_or_default(&dir);
    init_tracing(&config.log_level);
    tracing::debug!(dir = %dir.display(), "data directory");

    let ctx = Context {
        json: cli.json || config.display.json_output,
        dir,
        config,
    };

    match cli.command {
        Commands::Show => commands::habit::run(commands::habit::HabitAction::List, &ctx),
        Commands::Habit { action } => commands::habit::run(action, &ctx),
        Commands::Date { action } => commands::date::run(action, &ctx),
        Commands::Config { action } => commands::config::run(action, ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
