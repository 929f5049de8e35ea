//! Loaded flight network: the graph plus the flight list it was built from.

use serde::Serialize;
use tracing::debug;

use crate::alternates::top_paths;
use crate::dataset::FlightData;
use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::graph::WeightedGraph;
use crate::path::Path;

/// Flights at the extremes of the loaded data set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightStatistics {
    pub cheapest: Flight,
    pub most_expensive: Flight,
    pub shortest: Flight,
    pub longest: Flight,
}

/// A route together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub rank: usize,
    pub path: Path,
    pub total_price: f64,
    pub total_distance: f64,
    pub layovers: usize,
}

/// Graph of airports built from a [`FlightData`] value.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    graph: WeightedGraph<Flight>,
    data: FlightData,
}

impl FlightNetwork {
    /// Build the graph: every airport first, then every flight.
    pub fn from_data(data: FlightData) -> Self {
        let mut graph = WeightedGraph::new();
        for airport in &data.airports {
            graph.insert_node(airport);
        }
        for flight in &data.flights {
            if !graph.insert_edge(&flight.origin, &flight.destination, flight.clone()) {
                debug!(
                    origin = %flight.origin,
                    destination = %flight.destination,
                    "flight references an airport that was not loaded"
                );
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built flight network"
        );
        Self { graph, data }
    }

    pub fn graph(&self) -> &WeightedGraph<Flight> {
        &self.graph
    }

    pub fn airport_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn flight_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.graph.contains_node(code)
    }

    pub fn contains_flight(&self, origin: &str, destination: &str) -> bool {
        self.graph.contains_edge(origin, destination)
    }

    /// Unique airport codes in load order.
    pub fn airports(&self) -> &[String] {
        &self.data.airports
    }

    /// Up to three routes between two airports, cheapest first.
    pub fn top_paths(&self, from: &str, to: &str) -> Result<Vec<Path>> {
        top_paths(&self.graph, from, to)
    }

    /// [`FlightNetwork::top_paths`] with price, distance, and layovers attached.
    pub fn route_summaries(&self, from: &str, to: &str) -> Result<Vec<RouteSummary>> {
        self.top_paths(from, to)?
            .into_iter()
            .enumerate()
            .map(|(idx, path)| {
                Ok(RouteSummary {
                    rank: idx + 1,
                    total_price: self.total_price(&path)?,
                    total_distance: self.total_distance(&path)?,
                    layovers: self.layover_count(&path),
                    path,
                })
            })
            .collect()
    }

    pub fn total_distance(&self, path: &Path) -> Result<f64> {
        path.total_distance(&self.graph)
    }

    pub fn total_price(&self, path: &Path) -> Result<f64> {
        path.total_price(&self.graph)
    }

    pub fn layover_count(&self, path: &Path) -> usize {
        path.layover_count()
    }

    /// Cheapest and most expensive flight by price, shortest and longest by
    /// distance. Ties keep the first flight encountered in load order.
    ///
    /// Only flights stored as graph edges are scanned; a later row for an
    /// already connected pair is not part of the network.
    pub fn statistics(&self) -> Result<FlightStatistics> {
        let mut flights = self.data.flights.iter().filter(|flight| {
            self.graph
                .get_edge(&flight.origin, &flight.destination)
                .is_ok_and(|edge| edge == *flight)
        });
        let first = flights.next().ok_or(Error::EmptyDataset)?;

        let mut stats = FlightStatistics {
            cheapest: first.clone(),
            most_expensive: first.clone(),
            shortest: first.clone(),
            longest: first.clone(),
        };
        for flight in flights {
            if flight.price < stats.cheapest.price {
                stats.cheapest = flight.clone();
            }
            if flight.price > stats.most_expensive.price {
                stats.most_expensive = flight.clone();
            }
            if flight.distance < stats.shortest.distance {
                stats.shortest = flight.clone();
            }
            if flight.distance > stats.longest.distance {
                stats.longest = flight.clone();
            }
        }
        Ok(stats)
    }
}

impl From<FlightData> for FlightNetwork {
    fn from(data: FlightData) -> Self {
        Self::from_data(data)
    }
}
