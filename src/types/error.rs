//! Error types for the route-graph library.
//!
//! Graph operations themselves never fail; these errors come from the outer
//! surfaces that feed and print the graph.

use thiserror::Error;

/// All errors that can occur outside the core graph operations.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A route argument did not have the `FROM:TO:PRICE` shape.
    #[error("Invalid route '{0}': expected FROM:TO:PRICE")]
    InvalidRouteSpec(String),

    /// The price part of a route argument was not an integer.
    #[error("Invalid price '{value}' in route '{spec}'")]
    InvalidPrice { spec: String, value: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for route-graph operations that can fail.
pub type RouteResult<T> = Result<T, RouteError>;
