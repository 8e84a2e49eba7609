use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use tripplan::{TripPlanConfig, TripPlanError, TripPlanner, catalog, logging};

#[derive(Parser)]
#[command(name = "tripplan")]
#[command(about = "Rule-based travel itinerary generator for Indian tourist attractions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a day-by-day plan from a free-text request
    Plan {
        #[arg(help = "Travel request, e.g. \"I have 5 days in July and want to visit Pune\"")]
        request: String,

        #[arg(short, long, help = "Attractions CSV file (overrides configuration)")]
        data: Option<PathBuf>,

        #[arg(long, help = "Print the itinerary as JSON")]
        json: bool,
    },

    /// List the localities and regions the planner recognizes
    Destinations {
        #[arg(short, long, help = "Attractions CSV file (overrides configuration)")]
        data: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            match e.downcast_ref::<TripPlanError>() {
                Some(plan_err) => eprintln!("{}", plan_err.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TripPlanConfig::load_from_path(cli.config)?;
    logging::init_logging(&config.logging, cli.verbose)?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Plan {
            request,
            data,
            json,
        } => {
            let path = data.unwrap_or_else(|| config.catalog.path.clone());
            let catalog = catalog::init(&path)?;
            let planner = TripPlanner::with_settings(catalog, config.planner.clone());
            let itinerary = planner.plan(&request);

            if json {
                let rendered = serde_json::to_string_pretty(&itinerary)
                    .context("Failed to serialize itinerary")?;
                println!("{rendered}");
            } else {
                print!("{itinerary}");
            }
        }
        Commands::Destinations { data } => {
            let path = data.unwrap_or_else(|| config.catalog.path.clone());
            let catalog = catalog::init(&path)?;

            println!("Regions:");
            for region in catalog.known_regions() {
                println!("  {region}");
            }
            println!("Localities:");
            for locality in catalog.known_localities() {
                println!("  {locality}");
            }
        }
    }

    Ok(())
}
