//! In-memory route graph — the core data structure.

pub mod builder;
pub mod route_graph;
mod search;

pub use builder::GraphBuilder;
pub use route_graph::RouteGraph;
