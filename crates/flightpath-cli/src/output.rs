//! Output formatting for the CLI subcommands.
//!
//! Each renderer writes to any [`Write`] sink so the text layout can be
//! checked without capturing stdout. JSON output mirrors the library's
//! serializable types.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightpath_lib::{Flight, FlightStatistics, RouteSummary, MAX_ROUTES};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Airport listing as emitted in JSON format.
#[derive(Debug, Serialize)]
pub struct AirportList<'a> {
    pub count: usize,
    pub airports: &'a [String],
}

/// Network statistics as emitted in JSON format.
#[derive(Debug, Serialize)]
pub struct NetworkReport<'a> {
    pub airports: usize,
    pub flights: usize,
    #[serde(flatten)]
    pub extremes: &'a FlightStatistics,
}

/// Route search result as emitted in JSON format.
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub routes: &'a [RouteSummary],
}

/// Write any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Render the airport listing.
pub fn render_airports<W: Write>(out: &mut W, airports: &[String]) -> io::Result<()> {
    writeln!(out, "Airports ({}):", airports.len())?;
    for code in airports {
        writeln!(out, " - {code}")?;
    }
    Ok(())
}

/// Renderer for the `stats` and `route` text output.
pub struct TextRenderer {
    palette: ColorPalette,
}

impl TextRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Render node and edge counts followed by the four extreme flights.
    pub fn render_statistics<W: Write>(
        &self,
        out: &mut W,
        airports: usize,
        flights: usize,
        stats: &FlightStatistics,
    ) -> io::Result<()> {
        writeln!(out, "Airports: {airports}")?;
        writeln!(out, "Flights:  {flights}")?;
        writeln!(out)?;
        self.render_flight(out, "Cheapest flight", &stats.cheapest)?;
        self.render_flight(out, "Most expensive flight", &stats.most_expensive)?;
        self.render_flight(out, "Shortest flight", &stats.shortest)?;
        self.render_flight(out, "Longest flight", &stats.longest)
    }

    fn render_flight<W: Write>(&self, out: &mut W, label: &str, flight: &Flight) -> io::Result<()> {
        let p = &self.palette;
        writeln!(
            out,
            "{label:<22} {}{} -> {}{}  {}${:.2}{}  {}{} mi{}",
            p.white_bold,
            flight.origin,
            flight.destination,
            p.reset,
            p.green,
            flight.price,
            p.reset,
            p.cyan,
            format_miles(flight.distance),
            p.reset,
        )
    }

    /// Render ranked routes, then a note when fewer than the maximum exist.
    pub fn render_routes<W: Write>(
        &self,
        out: &mut W,
        from: &str,
        to: &str,
        routes: &[RouteSummary],
    ) -> io::Result<()> {
        let p = &self.palette;
        writeln!(
            out,
            "Routes from {}{from}{} to {}{to}{}:",
            p.white_bold, p.reset, p.white_bold, p.reset
        )?;

        for route in routes {
            writeln!(out)?;
            writeln!(out, "#{} {}", route.rank, self.tagged_nodes(route.path.nodes()))?;
            writeln!(
                out,
                "   {}price ${:.2}{} {}|{} {}distance {} mi{} {}|{} layovers {} {}|{} cost {:.2}",
                p.green,
                route.total_price,
                p.reset,
                p.gray,
                p.reset,
                p.cyan,
                format_miles(route.total_distance),
                p.reset,
                p.gray,
                p.reset,
                route.layovers,
                p.gray,
                p.reset,
                route.path.cost(),
            )?;
        }

        if routes.len() < MAX_ROUTES {
            writeln!(out)?;
            writeln!(
                out,
                "{}Only {} of {} routes could be found.{}",
                p.gray,
                routes.len(),
                MAX_ROUTES,
                p.reset
            )?;
        }
        Ok(())
    }

    fn tagged_nodes(&self, nodes: &[String]) -> String {
        let p = &self.palette;
        let last = nodes.len().saturating_sub(1);
        nodes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let (tag_color, tag) = if i == 0 {
                    (p.tag_origin, "ORIG")
                } else if i == last {
                    (p.tag_dest, "DEST")
                } else {
                    (p.tag_stop, "STOP")
                };
                format!("{tag_color}{tag}{} {}{code}{}", p.reset, p.white_bold, p.reset)
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

fn format_miles(distance: f64) -> String {
    if distance.is_finite() && distance >= 0.0 {
        format_with_separators(distance.round() as u64)
    } else {
        format!("{distance}")
    }
}
