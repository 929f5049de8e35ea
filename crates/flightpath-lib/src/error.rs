use thiserror::Error;

/// Convenient result alias for the flightpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation references an airport that is not in the graph.
    #[error("unknown airport: {id}")]
    UnknownNode { id: String },

    /// Raised when no direct flight connects the two airports.
    #[error("no flight from {origin} to {destination}")]
    EdgeNotFound { origin: String, destination: String },

    /// Raised when the destination cannot be reached from the start.
    #[error("no route found between {start} and {end}")]
    NoPathExists { start: String, end: String },

    /// Raised when a query needs at least one loaded flight.
    #[error("flight data set is empty")]
    EmptyDataset,

    /// A flight row that could not be parsed. The loader logs it and skips
    /// the row.
    #[error("malformed flight record on line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn unknown_node(id: &str) -> Self {
        Error::UnknownNode { id: id.to_string() }
    }

    pub(crate) fn edge_not_found(origin: &str, destination: &str) -> Self {
        Error::EdgeNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    /// `true` for failures an alternate-route probe is expected to hit.
    pub fn is_probe_failure(&self) -> bool {
        matches!(self, Error::NoPathExists { .. } | Error::EdgeNotFound { .. })
    }
}
