//! Core graph structure — cities keyed by name, each with its priced neighbors.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::{Itinerary, Price, Route};

use super::search;

/// Adjacency map: city -> (neighbor -> route from city to neighbor).
pub(crate) type Adjacency = HashMap<String, HashMap<String, Route>>;

/// A concurrency-safe, undirected, priced graph of cities.
///
/// Every route is stored once per direction. Mutations take the write lock and
/// go through [`link`]/[`unlink`], which always touch both directions, so a
/// reader never sees a route without its mirror.
#[derive(Debug, Default)]
pub struct RouteGraph {
    routes: RwLock<Adjacency>,
}

impl RouteGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph pre-populated with routes. Later routes between the same
    /// pair of cities replace earlier ones.
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let mut adjacency = Adjacency::new();
        for route in routes {
            link(&mut adjacency, route);
        }
        Self {
            routes: RwLock::new(adjacency),
        }
    }

    /// Insert or replace the route between `from` and `to`.
    ///
    /// Either city is created if it does not exist yet.
    pub fn upsert_route(&self, from: &str, to: &str, price: Price) {
        let mut routes = self.routes.write();
        log::debug!("upsert route {} <-> {} at {}", from, to, price);
        link(&mut routes, Route::new(from, to, price));
    }

    /// Change the price of an existing route. Returns `false` and leaves the
    /// graph untouched when there is no route between `from` and `to`.
    pub fn set_price(&self, from: &str, to: &str, price: Price) -> bool {
        let mut routes = self.routes.write();
        let exists = routes
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to));
        if !exists {
            log::debug!("set price {} <-> {}: no such route", from, to);
            return false;
        }
        log::debug!("set price {} <-> {} to {}", from, to, price);
        link(&mut routes, Route::new(from, to, price));
        true
    }

    /// Remove the route between `from` and `to`. Both cities stay in the graph,
    /// possibly with no neighbors left. Returns `false` if there was no route.
    pub fn remove_route(&self, from: &str, to: &str) -> bool {
        let mut routes = self.routes.write();
        let removed = unlink(&mut routes, from, to).is_some();
        log::debug!("remove route {} <-> {}: removed={}", from, to, removed);
        removed
    }

    /// Replace `old` with `new` as the endpoint of every route, then drop `old`.
    ///
    /// If `new` already has routes the two neighbor sets are merged. When both
    /// cities lead to the same third city, the route from `new` keeps its price
    /// and the one from `old` is discarded. A route between `old` and `new`
    /// disappears. Renaming a city to itself changes no routes; renaming a
    /// missing city only leaves an empty `new` entry behind.
    pub fn rename_city(&self, old: &str, new: &str) {
        let mut routes = self.routes.write();
        if old == new {
            routes.entry(new.to_string()).or_default();
            return;
        }

        let old_routes = routes.remove(old).unwrap_or_default();
        routes.entry(new.to_string()).or_default();
        log::debug!(
            "rename city {} -> {} ({} routes to move)",
            old,
            new,
            old_routes.len()
        );

        for (neighbor, route) in old_routes {
            if neighbor == old {
                // Self-loop on the renamed city.
                if !routes[new].contains_key(new) {
                    link(&mut routes, Route::new(new, new, route.price));
                }
                continue;
            }
            if let Some(back) = routes.get_mut(&neighbor) {
                back.remove(old);
            }
            if neighbor == new {
                log::debug!("rename {} -> {}: dropped route between them", old, new);
                continue;
            }
            if routes[new].contains_key(&neighbor) {
                log::debug!(
                    "rename {} -> {}: kept existing route to {}, discarded price {}",
                    old,
                    new,
                    neighbor,
                    route.price
                );
                continue;
            }
            link(&mut routes, Route::new(new, neighbor, route.price));
        }
    }

    /// Cheapest total price over all simple paths from `from` to `to`.
    ///
    /// A city is always reachable from itself at price 0, whether or not it is
    /// in the graph. Returns `None` when no path exists.
    pub fn find_cheapest_price(&self, from: &str, to: &str) -> Option<Price> {
        self.cheapest_route(from, to).map(|itinerary| itinerary.price)
    }

    /// Like [`find_cheapest_price`](Self::find_cheapest_price), but also reports
    /// one path that achieves the price.
    pub fn cheapest_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let routes = self.routes.read();
        search::cheapest_route(&routes, from, to)
    }

    /// The route from `from` to `to`, if any.
    pub fn route(&self, from: &str, to: &str) -> Option<Route> {
        self.routes.read().get(from)?.get(to).cloned()
    }

    /// Price of the direct route between two cities.
    pub fn price(&self, from: &str, to: &str) -> Option<Price> {
        self.routes.read().get(from)?.get(to).map(|r| r.price)
    }

    /// All routes leaving `city`, sorted by destination.
    pub fn neighbors(&self, city: &str) -> Vec<Route> {
        let routes = self.routes.read();
        let mut out: Vec<Route> = routes
            .get(city)
            .map(|n| n.values().cloned().collect())
            .unwrap_or_default();
        out.sort_by(|a, b| a.to.cmp(&b.to));
        out
    }

    /// Whether the city has an entry (possibly with no routes).
    pub fn contains_city(&self, city: &str) -> bool {
        self.routes.read().contains_key(city)
    }

    /// All city names, sorted.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.routes.read().keys().cloned().collect();
        cities.sort();
        cities
    }

    /// Every route once, in canonical direction, sorted.
    pub fn routes(&self) -> Vec<Route> {
        let routes = self.routes.read();
        let mut out: Vec<Route> = routes
            .values()
            .flat_map(|n| n.values())
            .filter(|r| r.from <= r.to)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.from.cmp(&b.from).then(a.to.cmp(&b.to)));
        out
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.routes.read().len()
    }

    /// Number of undirected routes.
    pub fn route_count(&self) -> usize {
        self.routes
            .read()
            .values()
            .flat_map(|n| n.values())
            .filter(|r| r.from <= r.to)
            .count()
    }

    /// Check that every route has a mirror with the same price.
    pub fn is_symmetric(&self) -> bool {
        let routes = self.routes.read();
        routes.iter().all(|(city, neighbors)| {
            neighbors.iter().all(|(neighbor, route)| {
                route.from == *city
                    && route.to == *neighbor
                    && routes
                        .get(neighbor)
                        .and_then(|back| back.get(city))
                        .is_some_and(|mirror| mirror.price == route.price)
            })
        })
    }
}

/// Write `route` and its mirror. The only place routes are inserted.
fn link(routes: &mut Adjacency, route: Route) {
    let mirror = route.reversed();
    routes
        .entry(route.from.clone())
        .or_default()
        .insert(route.to.clone(), route);
    routes
        .entry(mirror.from.clone())
        .or_default()
        .insert(mirror.to.clone(), mirror);
}

/// Remove both directions of a route, returning the `from` side.
fn unlink(routes: &mut Adjacency, from: &str, to: &str) -> Option<Route> {
    let removed = routes.get_mut(from)?.remove(to)?;
    if let Some(back) = routes.get_mut(to) {
        back.remove(from);
    }
    Some(removed)
}
