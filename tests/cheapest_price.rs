//! Cheapest-price search tests.

use route_graph::{GraphBuilder, RouteGraph};

fn sample_network() -> RouteGraph {
    let graph = RouteGraph::new();
    graph.upsert_route("A", "B", 50);
    graph.upsert_route("B", "C", 40);
    graph.upsert_route("C", "D", 30);
    graph
}

#[test]
fn test_sample_network_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();
    let graph = sample_network();

    assert!(graph.set_price("A", "B", 60));
    assert_eq!(graph.find_cheapest_price("A", "D"), Some(130));

    graph.upsert_route("A", "C", 100);
    graph.rename_city("E", "");
    graph.rename_city("G", "");

    assert_eq!(graph.find_cheapest_price("A", "C"), Some(100));
    assert_eq!(graph.find_cheapest_price("B", "A"), Some(60));
}

#[test]
fn test_self_path_is_free() {
    let graph = sample_network();
    assert_eq!(graph.find_cheapest_price("A", "A"), Some(0));
    assert_eq!(graph.find_cheapest_price("Nowhere", "Nowhere"), Some(0));

    let itinerary = graph.cheapest_route("A", "A").unwrap();
    assert_eq!(itinerary.cities, vec!["A"]);
    assert_eq!(itinerary.legs(), 0);
}

#[test]
fn test_unreachable_and_unknown_cities() {
    let graph = GraphBuilder::new()
        .route("A", "B", 1)
        .route("X", "Y", 1)
        .build();

    assert_eq!(graph.find_cheapest_price("A", "Y"), None);
    assert_eq!(graph.find_cheapest_price("A", "Missing"), None);
    assert_eq!(graph.find_cheapest_price("Missing", "A"), None);
}

#[test]
fn test_isolated_city_after_removal_is_unreachable() {
    let graph = sample_network();
    graph.remove_route("C", "D");

    assert!(graph.contains_city("D"));
    assert_eq!(graph.find_cheapest_price("A", "D"), None);
}

#[test]
fn test_prefers_cheaper_longer_path() {
    let graph = GraphBuilder::new()
        .route("A", "D", 200)
        .route("A", "B", 10)
        .route("B", "C", 10)
        .route("C", "D", 10)
        .build();

    let itinerary = graph.cheapest_route("A", "D").unwrap();
    assert_eq!(itinerary.price, 30);
    assert_eq!(itinerary.cities, vec!["A", "B", "C", "D"]);
    assert_eq!(itinerary.legs(), 3);
}

#[test]
fn test_negative_prices_use_simple_paths() {
    // A negative route is taken at most once even though the graph has a cycle.
    let graph = GraphBuilder::new()
        .route("A", "B", 5)
        .route("B", "C", -20)
        .route("C", "D", 5)
        .route("A", "D", 1)
        .build();

    assert_eq!(graph.find_cheapest_price("A", "D"), Some(-10));
    assert_eq!(graph.find_cheapest_price("B", "C"), Some(-20));
}

#[test]
fn test_sibling_branches_reuse_cities() {
    // Both branches from S pass through M; the second one must still find it.
    let graph = GraphBuilder::new()
        .route("S", "L", 1)
        .route("S", "R", 1)
        .route("L", "M", 100)
        .route("R", "M", 1)
        .route("M", "T", 1)
        .build();

    assert_eq!(graph.find_cheapest_price("S", "T"), Some(3));
}

#[test]
fn test_dense_cycle_terminates() {
    let cities = ["A", "B", "C", "D", "E", "F", "G"];
    let mut builder = GraphBuilder::new();
    for (i, a) in cities.iter().enumerate() {
        for b in &cities[i + 1..] {
            builder.route(a, b, 10);
        }
    }
    let graph = builder.build();

    assert_eq!(graph.find_cheapest_price("A", "G"), Some(10));
    assert_eq!(graph.route_count(), 21);
}

#[test]
fn test_price_is_symmetric() {
    let graph = GraphBuilder::new()
        .route("A", "B", 3)
        .route("B", "C", 4)
        .route("A", "C", 9)
        .build();

    for from in ["A", "B", "C"] {
        for to in ["A", "B", "C"] {
            assert_eq!(
                graph.find_cheapest_price(from, to),
                graph.find_cheapest_price(to, from)
            );
        }
    }
}

#[test]
fn test_price_sum_saturates() {
    let graph = GraphBuilder::new()
        .route("A", "B", i64::MAX)
        .route("B", "C", i64::MAX)
        .build();

    assert_eq!(graph.find_cheapest_price("A", "C"), Some(i64::MAX));
}
