//! CLI command implementations.

use std::thread;

use serde::Serialize;

use crate::graph::{GraphBuilder, RouteGraph};
use crate::types::{Itinerary, Price, Route, RouteError, RouteResult, ROUTE_SPEC_SEPARATOR};

/// Parse a `FROM:TO:PRICE` route argument.
pub fn parse_route_spec(spec: &str) -> RouteResult<Route> {
    let parts: Vec<&str> = spec.split(ROUTE_SPEC_SEPARATOR).collect();
    let [from, to, price] = parts.as_slice() else {
        return Err(RouteError::InvalidRouteSpec(spec.to_string()));
    };
    let price: Price = price.trim().parse().map_err(|_| RouteError::InvalidPrice {
        spec: spec.to_string(),
        value: price.to_string(),
    })?;
    Ok(Route::new(from.trim(), to.trim(), price))
}

/// Build a graph from route arguments, in order.
pub fn graph_from_specs(specs: &[String]) -> RouteResult<RouteGraph> {
    let routes = specs
        .iter()
        .map(|spec| parse_route_spec(spec))
        .collect::<RouteResult<Vec<_>>>()?;
    let mut builder = GraphBuilder::new();
    builder.routes(routes);
    log::debug!("built graph from {} route arguments", builder.len());
    Ok(builder.build())
}

/// Print the cheapest price and path between two cities.
pub fn cmd_price(specs: &[String], from: &str, to: &str, json: bool) -> RouteResult<()> {
    let graph = graph_from_specs(specs)?;
    let itinerary = graph.cheapest_route(from, to);

    if json {
        let out = serde_json::json!({
            "from": from,
            "to": to,
            "found": itinerary.is_some(),
            "price": itinerary.as_ref().map(|i| i.price),
            "cities": itinerary.as_ref().map(|i| &i.cities),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match itinerary {
            Some(itinerary) => print_itinerary(from, to, &itinerary),
            None => println!("No route from {} to {}", from, to),
        }
    }
    Ok(())
}

/// Rename a city and print the resulting routes.
pub fn cmd_rename(specs: &[String], old: &str, new: &str, json: bool) -> RouteResult<()> {
    let graph = graph_from_specs(specs)?;
    graph.rename_city(old, new);
    print_graph(&graph, json)
}

/// Print the cities and routes described by the arguments.
pub fn cmd_routes(specs: &[String], json: bool) -> RouteResult<()> {
    let graph = graph_from_specs(specs)?;
    print_graph(&graph, json)
}

/// One lookup performed by the demo.
#[derive(Debug, Clone, Serialize)]
pub struct DemoQuery {
    pub from: String,
    pub to: String,
    pub price: Option<Price>,
}

/// Everything the demo observed.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Lookups from the scripted part of the demo.
    pub queries: Vec<DemoQuery>,
    /// Lookups performed by the reader threads.
    pub reader_lookups: usize,
    /// Reader lookups that found a path.
    pub reader_hits: usize,
    /// Mutations performed by the writer threads.
    pub writer_updates: usize,
    /// Routes left when all threads finished.
    pub routes: Vec<Route>,
    /// Whether every route still had a matching mirror at the end.
    pub symmetric: bool,
}

/// Run the scripted sample network, then hammer the same graph with
/// concurrent readers and writers.
pub fn run_demo(readers: usize, rounds: usize) -> DemoReport {
    let graph = RouteGraph::new();
    let mut queries = Vec::new();
    let mut lookup = |graph: &RouteGraph, from: &str, to: &str| {
        queries.push(DemoQuery {
            from: from.to_string(),
            to: to.to_string(),
            price: graph.find_cheapest_price(from, to),
        });
    };

    graph.upsert_route("A", "B", 50);
    graph.upsert_route("B", "C", 40);
    graph.upsert_route("C", "D", 30);
    graph.set_price("A", "B", 60);
    lookup(&graph, "A", "D");

    graph.upsert_route("A", "C", 100);
    graph.rename_city("E", "");
    graph.rename_city("G", "");
    lookup(&graph, "A", "C");
    lookup(&graph, "B", "A");

    let (reader_lookups, reader_hits, writer_updates) = run_workers(&graph, readers, rounds);
    log::info!(
        "demo finished: {} lookups ({} found), {} updates",
        reader_lookups,
        reader_hits,
        writer_updates
    );

    DemoReport {
        queries,
        reader_lookups,
        reader_hits,
        writer_updates,
        routes: graph.routes(),
        symmetric: graph.is_symmetric(),
    }
}

/// Readers cycle through city pairs while two writers reprice
/// existing routes and add/remove a spur route.
fn run_workers(graph: &RouteGraph, readers: usize, rounds: usize) -> (usize, usize, usize) {
    const CITIES: [&str; 5] = ["A", "B", "C", "D", "E"];

    thread::scope(|scope| {
        let reader_handles: Vec<_> = (0..readers)
            .map(|reader| {
                scope.spawn(move || {
                    let mut lookups: usize = 0;
                    let mut hits: usize = 0;
                    for round in 0..rounds {
                        let from = CITIES[(reader + round) % CITIES.len()];
                        let to = CITIES[(reader + 2 * round + 1) % CITIES.len()];
                        lookups += 1;
                        if graph.find_cheapest_price(from, to).is_some() {
                            hits += 1;
                        }
                    }
                    log::debug!("reader {} done: {}/{} found", reader, hits, lookups);
                    (lookups, hits)
                })
            })
            .collect();

        let pricer = scope.spawn(move || {
            let mut updates: usize = 0;
            for round in 0..rounds {
                let price = 40 + (round % 30) as Price;
                if graph.set_price("B", "C", price) {
                    updates += 1;
                }
            }
            updates
        });

        let builder = scope.spawn(move || {
            let mut updates: usize = 0;
            for round in 0..rounds {
                if round % 2 == 0 {
                    graph.upsert_route("D", "E", 20 + round as Price);
                    updates += 1;
                } else if graph.remove_route("D", "E") {
                    updates += 1;
                }
            }
            updates
        });

        let (lookups, hits) = reader_handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .fold((0, 0), |(l, h), (rl, rh)| (l + rl, h + rh));
        let updates = pricer.join().unwrap_or(0) + builder.join().unwrap_or(0);
        (lookups, hits, updates)
    })
}

/// Run the demo and print its report.
pub fn cmd_demo(readers: usize, rounds: usize, json: bool) -> RouteResult<()> {
    let report = run_demo(readers, rounds);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for query in &report.queries {
        match query.price {
            Some(price) => println!("Price from {} to {}: {}", query.from, query.to, price),
            None => println!("No route from {} to {}", query.from, query.to),
        }
    }
    println!(
        "Readers: {} lookups, {} found",
        report.reader_lookups, report.reader_hits
    );
    println!("Writers: {} updates", report.writer_updates);
    println!("Routes:");
    for route in &report.routes {
        println!("  {}", route);
    }
    println!("Symmetric: {}", report.symmetric);
    Ok(())
}

fn print_itinerary(from: &str, to: &str, itinerary: &Itinerary) {
    println!("Price from {} to {}: {}", from, to, itinerary.price);
    println!(
        "Path: {} ({} legs)",
        itinerary.cities.join(" -> "),
        itinerary.legs()
    );
}

fn print_graph(graph: &RouteGraph, json: bool) -> RouteResult<()> {
    if json {
        let out = serde_json::json!({
            "cities": graph.cities(),
            "routes": graph.routes(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Cities: {}", graph.city_count());
        for city in graph.cities() {
            println!("  {:?}", city);
        }
        println!("Routes: {}", graph.route_count());
        for route in graph.routes() {
            println!("  {}", route);
        }
    }
    Ok(())
}
