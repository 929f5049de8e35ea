//! Flight data loading.
//!
//! Flight files are headerless comma-delimited text with one flight per line:
//!
//! ```text
//! origin,destination,price,distance
//! ```
//!
//! Rows that cannot be parsed are skipped with a warning so one bad line does
//! not prevent the rest of the file from loading. Extra trailing columns are
//! ignored.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::flight::Flight;

/// Airports and flights read from a data file, in first-seen order.
///
/// Each airport appears once. Rows that repeat an earlier flight exactly are
/// dropped; rows that reuse an origin/destination pair with different
/// measures are kept.
#[derive(Debug, Clone, Default)]
pub struct FlightData {
    pub airports: Vec<String>,
    pub flights: Vec<Flight>,
    seen_airports: HashSet<String>,
    seen_flights: HashSet<FlightKey>,
}

type FlightKey = (String, String, u64, u64);

impl FlightData {
    /// Load flight data from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let data = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            airports = data.airports.len(),
            flights = data.flights.len(),
            "loaded flight data"
        );
        Ok(data)
    }

    /// Load flight data from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut data = Self::default();
        for result in csv_reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!(%err, "skipping unreadable flight row");
                    continue;
                }
            };
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            match parse_record(&record, line) {
                Ok(flight) => data.push(flight),
                Err(err) => warn!(%err, "skipping flight row"),
            }
        }
        Ok(data)
    }

    /// Record a flight and its airports, ignoring exact repeats.
    pub fn push(&mut self, flight: Flight) {
        self.add_airport(&flight.origin);
        self.add_airport(&flight.destination);

        let key = (
            flight.origin.clone(),
            flight.destination.clone(),
            (flight.price + 0.0).to_bits(),
            (flight.distance + 0.0).to_bits(),
        );
        if self.seen_flights.insert(key) {
            self.flights.push(flight);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    fn add_airport(&mut self, code: &str) {
        if self.seen_airports.insert(code.to_string()) {
            self.airports.push(code.to_string());
        }
    }
}

/// Convenience wrapper around [`FlightData::from_path`].
pub fn load_flights(path: &Path) -> Result<FlightData> {
    FlightData::from_path(path)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Flight> {
    let malformed = |message: String| Error::MalformedRecord { line, message };

    if record.len() < 4 {
        return Err(malformed(format!(
            "expected 4 fields, found {}",
            record.len()
        )));
    }

    let origin = &record[0];
    let destination = &record[1];
    if origin.is_empty() || destination.is_empty() {
        return Err(malformed("airport code is empty".to_string()));
    }

    let price = parse_measure(&record[2], "price").map_err(malformed)?;
    let distance = parse_measure(&record[3], "distance").map_err(malformed)?;

    Ok(Flight::new(origin, destination, price, distance))
}

fn parse_measure(raw: &str, field: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|err| format!("invalid {field} '{raw}': {err}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a non-negative number, got {raw}"));
    }
    // Fold -0 into 0 so duplicate detection compares equal measures.
    Ok(value + 0.0)
}
