//! Airports command handler.

use std::io;

use anyhow::Result;

use flightpath_cli::output::{render_airports, render_json, AirportList, OutputFormat};
use flightpath_lib::FlightNetwork;

/// List every airport code in load order.
pub fn handle_airports(network: &FlightNetwork, format: OutputFormat) -> Result<()> {
    let airports = network.airports();
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_airports(&mut stdout, airports)?,
        OutputFormat::Json => render_json(
            &mut stdout,
            &AirportList {
                count: airports.len(),
                airports,
            },
        )?,
    }
    Ok(())
}
