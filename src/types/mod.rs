//! All data types for the route-graph library.

pub mod error;
pub mod route;

pub use error::{RouteError, RouteResult};
pub use route::{Itinerary, Route};

/// Ticket price type. Prices are plain integers; the graph accepts any value.
pub type Price = i64;

/// Reader threads started by the concurrent demo unless overridden.
pub const DEFAULT_READERS: usize = 4;

/// Rounds each demo worker performs unless overridden.
pub const DEFAULT_ROUNDS: usize = 50;

/// Separator between the parts of a `FROM:TO:PRICE` route argument.
pub const ROUTE_SPEC_SEPARATOR: char = ':';
