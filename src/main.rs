mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::date_range::parse_date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventfinder")]
#[command(about = "Ask about university events by name or date")]
struct Cli {
    /// Calendar file (.ics) to use instead of calendar_path from the config
    #[arg(long, global = true)]
    calendar: Option<PathBuf>,

    /// Answer as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a conversation (default)
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question, e.g. "when is spring break"
        #[arg(required = true)]
        query: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show where eventfinder reads its config and calendar from
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EventFinderConfig::load()?;
    let today = cli.today.as_deref().map(parse_date).transpose()?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let resolver = commands::load_resolver(&config, cli.calendar.as_deref())?;
            commands::chat::run(&resolver, &config, today)
        }
        Commands::Ask { query, json } => {
            let resolver = commands::load_resolver(&config, cli.calendar.as_deref())?;
            commands::ask::run(&resolver, &config, today, &query.join(" "), json)
        }
        Commands::Config => commands::config::run(&config, cli.calendar.as_deref()),
    }
}

/// Logs go to stderr so they never mix with answers. RUST_LOG wins over --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
