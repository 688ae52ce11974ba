//! TripBoard CLI
//!
//! Terminal access to the itinerary: dropdown options, the markdown table,
//! the day agenda, map rendering and weather lookups.

#![allow(clippy::print_stdout)]

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use application::{ItineraryService, MapRenderer, WeatherService};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, CsvItinerarySource, EnvSecretStore, TemplateEngine, WeatherAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::MapArgs;

/// TripBoard CLI
#[derive(Parser)]
#[command(name = "tripboard")]
#[command(author, version, about = "Turkey trip itinerary viewer", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Itinerary CSV (overrides `itinerary.path` from the config)
    #[arg(short, long, global = true)]
    itinerary: Option<PathBuf>,

    /// Config file (default: ./tripboard.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the date filter options
    Dates,

    /// List the focus options
    Locations,

    /// Render the map for a date and optional focus
    ///
    /// Example: tripboard map --date 2025-01-15 --focus "Blue Mosque" -o map.html
    Map {
        /// "All Days" (default) or a date such as 2025-01-15
        #[arg(short, long)]
        date: Option<String>,

        /// Location to center on
        #[arg(short, long)]
        focus: Option<String>,

        /// Map size: standard (700x500) or large (1050x750)
        #[arg(short, long, default_value = "standard")]
        size: String,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the map view as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Show current weather for a city
    Weather {
        /// City name (default: weather.default_city, Istanbul)
        city: Option<String>,
    },

    /// Print the itinerary as a markdown table
    Table,

    /// Print the day-by-day agenda
    Agenda,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(path) = cli.itinerary {
        config.itinerary.path = path;
    }

    if let Commands::Weather { city } = &cli.command {
        config.resolve_secrets(&EnvSecretStore::tripboard()).await;
        let adapter = WeatherAdapter::from_app_config(&config.weather)?;
        let service = WeatherService::new(Arc::new(adapter));
        let city = city.as_deref().unwrap_or(&config.weather.default_city);
        tracing::info!(%city, "Fetching weather");
        println!("{}", commands::weather(&service, city).await?);
        return Ok(());
    }

    let source = CsvItinerarySource::new(config.itinerary.path.clone());
    let itinerary = ItineraryService::new(Arc::new(source)).itinerary()?;
    tracing::debug!(stops = itinerary.len(), "Itinerary loaded");

    match cli.command {
        Commands::Dates => println!("{}", commands::list_dates(&itinerary)),

        Commands::Locations => println!("{}", commands::list_locations(&itinerary)),

        Commands::Table => print!("{}", commands::table(&itinerary)),

        Commands::Agenda => print!("{}", commands::agenda(&itinerary)),

        Commands::Map {
            date,
            focus,
            size,
            output,
            json,
        } => {
            let renderer = MapRenderer::new(config.map.map_defaults()?);
            let templates = TemplateEngine::new()?;
            let args = MapArgs {
                date,
                focus,
                size: Some(size),
                json,
            };
            let rendered =
                commands::render_map(&itinerary, &renderer, &templates, &config.map, &args)?;

            match output {
                Some(path) => {
                    commands::write_output(&path, &rendered)?;
                    println!("🗺️  Map written to {}", path.display());
                },
                None => println!("{rendered}"),
            }
        },

        Commands::Weather { .. } => {},
    }

    Ok(())
}
