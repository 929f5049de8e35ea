//! Flight payloads carried on graph edges.

use serde::Serialize;

/// Weight applied to distance when deriving the scalar edge cost.
pub const DISTANCE_WEIGHT: f64 = 0.05;
/// Weight applied to price when deriving the scalar edge cost.
pub const PRICE_WEIGHT: f64 = 0.95;

/// Measures an edge payload must expose so the graph can search over it.
///
/// `value()` must be non-negative for every payload stored in a graph,
/// otherwise shortest-path results are meaningless.
pub trait EdgeWeight {
    /// Distance travelled along the edge.
    fn distance(&self) -> f64;

    /// Price paid for the edge.
    fn price(&self) -> f64;

    /// Scalar cost minimised by the shortest-path search.
    fn value(&self) -> f64 {
        DISTANCE_WEIGHT * self.distance() + PRICE_WEIGHT * self.price()
    }
}

/// A direct flight between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub origin: String,
    pub destination: String,
    pub price: f64,
    /// Distance in miles.
    pub distance: f64,
}

impl Flight {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        price: f64,
        distance: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            price,
            distance,
        }
    }
}

impl EdgeWeight for Flight {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn price(&self) -> f64 {
        self.price
    }
}
