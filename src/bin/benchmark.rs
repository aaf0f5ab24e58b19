use std::env;
use std::time::{Duration, Instant};

use graph_center::graph::generators::{generate_random, WeightedGraph};
use graph_center::graph::Adjacency;
use graph_center::{CenterFinder, DirectedGraph, NaiveCenterFinder, Result};
use log::info;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// One line of the benchmark report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    component_size: usize,
    center_count: usize,
    radius: f64,
    millis: u128,
}

// Function to benchmark the center finder on a graph
fn benchmark_center_finder(
    finder: &NaiveCenterFinder,
    generated: &WeightedGraph,
) -> Result<(BenchmarkRow, Duration)> {
    let graph = &generated.graph;
    info!(
        "Running {} on graph with {} vertices...",
        CenterFinder::<OrderedFloat<f64>, DirectedGraph>::name(finder),
        graph.node_count()
    );

    let start = Instant::now();
    let result = finder.find_center_nodes(graph, generated.nodes[0], &generated.weights)?;
    let duration = start.elapsed();

    let row = BenchmarkRow {
        vertices: graph.node_count(),
        edges: graph.edge_count(),
        component_size: result.component_size(),
        center_count: result.center_nodes().len(),
        radius: result.radius().map_or(f64::NAN, |r| r.into_inner()),
        millis: duration.as_millis(),
    };
    Ok((row, duration))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: sizes, then optional --json
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut graph_sizes: Vec<usize> = args.iter().filter_map(|a| a.parse().ok()).filter(|&n| n > 0).collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![100, 250, 500, 1_000];
    }

    // Edge factor: average number of extra edges per vertex
    let edge_factor = 2.0;
    let mut rng = StdRng::seed_from_u64(42);
    let finder = NaiveCenterFinder::new().with_weight_check(true);

    let mut rows = Vec::new();
    for &size in &graph_sizes {
        let generated = generate_random(size, edge_factor, &mut rng)?;
        let (row, duration) = benchmark_center_finder(&finder, &generated)?;
        info!("  - {} center node(s) found in {:?}", row.center_count, duration);
        rows.push(row);
    }

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
        return Ok(());
    }

    println!("{:<10} | {:<10} | {:<10} | {:<8} | {:<10} | {:<10}",
             "Vertices", "Edges", "Component", "Centers", "Radius", "Time (ms)");
    println!("-----------------------------------------------------------------------");
    for row in &rows {
        println!("{:<10} | {:<10} | {:<10} | {:<8} | {:<10.2} | {:<10}",
                 row.vertices, row.edges, row.component_size, row.center_count,
                 row.radius, row.millis);
    }

    Ok(())
}
