use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightpath_cli::output::OutputFormat;
use flightpath_lib::{load_flights, FlightNetwork};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network statistics and route search")]
struct Cli {
    /// Flight data file (origin,destination,price,distance per line).
    #[arg(long, global = true, env = "FLIGHTPATH_DATA")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every airport in the loaded data.
    Airports,
    /// Show airport and flight counts with the cheapest, most expensive,
    /// shortest, and longest flights.
    Stats,
    /// Find up to three cheapest routes between two airports.
    Route {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_path = cli
        .data
        .as_deref()
        .ok_or_else(|| anyhow!("no flight data file given; pass --data or set FLIGHTPATH_DATA"))?;
    let network = load_network(data_path)?;

    match cli.command {
        Command::Airports => commands::airports::handle_airports(&network, cli.format),
        Command::Stats => commands::stats::handle_stats(&network, cli.format),
        Command::Route { from, to } => {
            commands::route::handle_route(&network, &from, &to, cli.format)
        }
    }
}

fn load_network(path: &Path) -> Result<FlightNetwork> {
    let data = load_flights(path)
        .with_context(|| format!("failed to load flight data from {}", path.display()))?;
    if data.is_empty() {
        tracing::warn!(path = %path.display(), "flight data file contains no usable flights");
    }
    Ok(FlightNetwork::from_data(data))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
