//! Cheapest-path search by exhaustive depth-first enumeration of simple paths.
//!
//! Every simple path is priced, so any route prices are handled correctly,
//! negative ones included. The cost is exponential in the worst case.

use std::collections::HashSet;

use crate::types::{Itinerary, Price};

use super::route_graph::Adjacency;

/// Partial result of the search: the cheapest way from some city to the
/// destination, with the path stored destination-first.
struct Leg<'a> {
    price: Price,
    reversed_path: Vec<&'a str>,
}

/// Cheapest path between two cities. Callers hold the read lock for the
/// whole call.
pub(crate) fn cheapest_route<'a>(
    routes: &'a Adjacency,
    from: &'a str,
    to: &'a str,
) -> Option<Itinerary> {
    if from == to {
        return Some(Itinerary {
            price: 0,
            cities: vec![from.to_string()],
        });
    }
    if !routes.contains_key(from) || !routes.contains_key(to) {
        log::trace!("cheapest route {} -> {}: unknown city", from, to);
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let leg = search(routes, from, to, &mut visited)?;
    log::trace!(
        "cheapest route {} -> {}: {} over {} cities",
        from,
        to,
        leg.price,
        leg.reversed_path.len()
    );

    Some(Itinerary {
        price: leg.price,
        cities: leg
            .reversed_path
            .into_iter()
            .rev()
            .map(str::to_string)
            .collect(),
    })
}

/// Depth-first search from `current`. `visited` holds exactly the cities on
/// the current path: `current` is marked on entry and unmarked on return so
/// sibling branches may pass through it again.
fn search<'a>(
    routes: &'a Adjacency,
    current: &'a str,
    to: &str,
    visited: &mut HashSet<&'a str>,
) -> Option<Leg<'a>> {
    if current == to {
        return Some(Leg {
            price: 0,
            reversed_path: vec![current],
        });
    }

    visited.insert(current);
    let mut best: Option<Leg<'a>> = None;

    if let Some(neighbors) = routes.get(current) {
        for (city, route) in neighbors {
            if visited.contains(city.as_str()) {
                continue;
            }
            if let Some(mut leg) = search(routes, city, to, visited) {
                leg.price = leg.price.saturating_add(route.price);
                if best.as_ref().map_or(true, |b| leg.price < b.price) {
                    best = Some(leg);
                }
            }
        }
    }

    visited.remove(current);
    best.map(|mut leg| {
        leg.reversed_path.push(current);
        leg
    })
}
