//! Stats command handler.

use std::io;

use anyhow::{Context, Result};

use flightpath_cli::output::{render_json, NetworkReport, OutputFormat, TextRenderer};
use flightpath_cli::terminal::ColorPalette;
use flightpath_lib::FlightNetwork;

/// Print node and edge counts plus the extreme flights by price and distance.
pub fn handle_stats(network: &FlightNetwork, format: OutputFormat) -> Result<()> {
    let stats = network
        .statistics()
        .context("cannot compute statistics for this data file")?;
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => TextRenderer::new(ColorPalette::detect()).render_statistics(
            &mut stdout,
            network.airport_count(),
            network.flight_count(),
            &stats,
        )?,
        OutputFormat::Json => render_json(
            &mut stdout,
            &NetworkReport {
                airports: network.airport_count(),
                flights: network.flight_count(),
                extremes: &stats,
            },
        )?,
    }
    Ok(())
}
