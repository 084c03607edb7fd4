//! RouteGraph — a concurrent in-memory graph of priced routes between cities.
//!
//! Cities are created implicitly by the routes that mention them. Every route
//! is bidirectional with one price, and the cheapest price between two cities
//! is found by pricing every simple path between them.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{GraphBuilder, RouteGraph};
pub use types::{Itinerary, Price, Route, RouteError, RouteResult};
