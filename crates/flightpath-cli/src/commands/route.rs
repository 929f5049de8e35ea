//! Route command handler.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use flightpath_cli::output::{render_json, OutputFormat, RouteReport, TextRenderer};
use flightpath_cli::terminal::ColorPalette;
use flightpath_lib::FlightNetwork;

/// Find up to three routes between two airports and print them cheapest first.
pub fn handle_route(
    network: &FlightNetwork,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let (from, to) = (from.trim(), to.trim());

    let routes = network
        .route_summaries(from, to)
        .with_context(|| format!("failed to plan a route from {from} to {to}"))?;
    debug!(from = %from, to = %to, routes = routes.len(), "route search complete");

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => TextRenderer::new(ColorPalette::detect())
            .render_routes(&mut stdout, from, to, &routes)?,
        OutputFormat::Json => render_json(
            &mut stdout,
            &RouteReport {
                from,
                to,
                routes: &routes,
            },
        )?,
    }
    Ok(())
}
