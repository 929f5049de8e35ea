//! Flightpath library entry points.
//!
//! This crate exposes a directed weighted graph of airports, a lowest-cost
//! route search over it, and a bounded heuristic that proposes a second and
//! third cheapest route. A thin loader turns a flight file into
//! [`FlightData`], and [`FlightNetwork`] bundles the graph with the queries a
//! presentation layer needs. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod alternates;
pub mod dataset;
pub mod error;
pub mod flight;
pub mod graph;
pub mod network;
pub mod path;
pub mod search;

pub use alternates::{top_paths, AlternatePathFinder, MAX_ROUTES};
pub use dataset::{load_flights, FlightData};
pub use error::{Error, Result};
pub use flight::{EdgeWeight, Flight};
pub use graph::{NodeIndex, WeightedGraph};
pub use network::{FlightNetwork, FlightStatistics, RouteSummary};
pub use path::Path;
pub use search::shortest_path;
