mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use campus_core::config::CampusConfig;
use campus_core::event::EventCategory;
use clap::{Parser, Subcommand};
use flexi_logger::{FileSpec, Logger};

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus life from the terminal: events calendar, weather, map search and community board")]
struct Cli {
    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the events calendar for a month
    Calendar {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Move this many months forward (or back, if negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// List this month's events
    Events {
        /// all, music, tech or art
        #[arg(short, long, default_value = "all")]
        filter: EventCategory,
    },
    /// Show details for one event
    Event { name: String },
    /// Current conditions for event planning
    Weather,
    /// Search the campus map
    Search { query: Option<String> },
    /// Post to the community board
    Post { text: String },
    /// Show which page controller a URL path maps to
    Page {
        path: String,

        /// On the home page, press the carousel's pause/play button
        #[arg(long)]
        toggle_carousel: bool,

        /// On the map page, search for the Nth popular location (1-based)
        #[arg(long)]
        suggestion: Option<usize>,
    },
    /// Show config location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;
    if let Some(log_file) = &cli.log_file {
        logger = logger.log_to_file(FileSpec::try_from(log_file)?);
    }
    let _logger = logger.start()?;

    match cli.command {
        Commands::Calendar {
            year,
            month,
            offset,
        } => {
            let config = CampusConfig::load()?;
            commands::calendar::run(config.event_catalog()?, year, month, offset)
        }
        Commands::Events { filter } => {
            let config = CampusConfig::load()?;
            commands::events::run(config.event_catalog()?, filter)
        }
        Commands::Event { name } => {
            let config = CampusConfig::load()?;
            commands::event::run(config.event_catalog()?, &name)
        }
        Commands::Weather => {
            let config = CampusConfig::load()?;
            commands::weather::run(&config.weather).await
        }
        Commands::Search { query } => commands::search::run(query.as_deref().unwrap_or_default()).await,
        Commands::Post { text } => commands::post::run(&text),
        Commands::Page {
            path,
            toggle_carousel,
            suggestion,
        } => commands::page::run(&path, toggle_carousel, suggestion),
        Commands::Config => commands::config::run(),
    }
}
