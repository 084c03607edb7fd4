//! Concurrent readers and writers sharing one graph.

use std::sync::Arc;
use std::thread;

use route_graph::cli::commands::run_demo;
use route_graph::{GraphBuilder, RouteGraph};

#[test]
fn test_readers_never_see_half_written_routes() {
    let _ = env_logger::builder().is_test(true).try_init();
    let graph = GraphBuilder::new()
        .route("A", "B", 1)
        .route("B", "C", 1)
        .build();

    thread::scope(|scope| {
        for writer in 0..2 {
            let graph = &graph;
            scope.spawn(move || {
                for round in 0..500 {
                    let price = (writer * 1000 + round) as i64;
                    graph.upsert_route("A", "B", price);
                    graph.set_price("B", "C", price);
                    if round % 10 == 0 {
                        graph.remove_route("C", "D");
                        graph.upsert_route("C", "D", price);
                    }
                }
            });
        }
        for _ in 0..4 {
            let graph = &graph;
            scope.spawn(move || {
                for _ in 0..500 {
                    assert!(graph.is_symmetric());
                    let forward = graph.price("A", "B");
                    assert!(forward.is_some());
                    assert!(graph.find_cheapest_price("A", "C").is_some());
                }
            });
        }
    });

    assert!(graph.is_symmetric());
}

#[test]
fn test_shared_through_arc() {
    let graph = Arc::new(RouteGraph::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                graph.upsert_route("Hub", &format!("City{}", i), i as i64 + 1);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(graph.route_count(), 8);
    assert_eq!(graph.neighbors("Hub").len(), 8);
    assert_eq!(graph.find_cheapest_price("City0", "City7"), Some(9));
}

#[test]
fn test_concurrent_renames_and_searches() {
    let graph = GraphBuilder::new()
        .route("A", "B", 10)
        .route("B", "C", 10)
        .route("C", "D", 10)
        .build();

    thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..200 {
                if round % 2 == 0 {
                    graph.rename_city("B", "B2");
                } else {
                    graph.rename_city("B2", "B");
                }
            }
        });
        scope.spawn(|| {
            for _ in 0..200 {
                assert_eq!(graph.find_cheapest_price("A", "D"), Some(30));
            }
        });
    });

    assert!(graph.contains_city("B"));
    assert!(!graph.contains_city("B2"));
    assert!(graph.is_symmetric());
}

#[test]
fn test_demo_report() {
    let report = run_demo(3, 40);

    let prices: Vec<_> = report.queries.iter().map(|q| q.price).collect();
    assert_eq!(prices, vec![Some(130), Some(100), Some(60)]);
    assert_eq!(report.reader_lookups, 120);
    assert!(report.reader_hits > 0);
    assert!(report.writer_updates > 0);
    assert!(report.symmetric);
}
