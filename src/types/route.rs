//! The route value type and the search result it feeds.

use serde::{Deserialize, Serialize};

use super::Price;

/// A priced connection between two cities, seen from `from`.
///
/// The graph stores every route twice, once per direction, and both copies
/// always carry the same price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// City the route leaves from.
    pub from: String,
    /// City the route arrives at.
    pub to: String,
    /// Ticket price for travelling the route in either direction.
    pub price: Price,
}

impl Route {
    /// Create a new route.
    pub fn new(from: impl Into<String>, to: impl Into<String>, price: Price) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            price,
        }
    }

    /// The same route seen from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            price: self.price,
        }
    }

    /// The direction with the lexicographically smaller city first.
    pub fn canonical(&self) -> Self {
        if self.from <= self.to {
            self.clone()
        } else {
            self.reversed()
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {} ({})", self.from, self.to, self.price)
    }
}

/// A cheapest path between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// Total price of every route along the path.
    pub price: Price,
    /// Cities visited in order, starting at the origin and ending at the destination.
    pub cities: Vec<String>,
}

impl Itinerary {
    /// Number of routes travelled.
    pub fn legs(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}
