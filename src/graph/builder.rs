//! Fluent API for building RouteGraph instances.

use crate::types::{Price, Route};

use super::RouteGraph;

/// Fluent builder for constructing a RouteGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    routes: Vec<Route>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route between two cities. A later route between the same pair
    /// replaces an earlier one.
    pub fn route(&mut self, from: &str, to: &str, price: Price) -> &mut Self {
        self.routes.push(Route::new(from, to, price));
        self
    }

    /// Add several routes at once.
    pub fn routes<I>(&mut self, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = Route>,
    {
        self.routes.extend(routes);
        self
    }

    /// Number of routes added so far (duplicates included).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes have been added.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the final RouteGraph.
    pub fn build(&mut self) -> RouteGraph {
        RouteGraph::from_routes(std::mem::take(&mut self.routes))
    }
}
