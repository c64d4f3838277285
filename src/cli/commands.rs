//! CLI command implementations.

use std::path::Path;

use crate::dp;
use crate::format::{edge_count, GraphReader};
use crate::graph::{connected_components_count, has_path, reachable_from};
use crate::types::{PresentItem, TraversalStrategy, TraverseResult};

/// Display node and edge counts for a graph file.
pub fn cmd_info(path: &Path, json: bool) -> TraverseResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let isolated = graph.values().filter(|n| n.is_empty()).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.len(),
            "edges": edge_count(&graph),
            "sinks": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.len());
        println!("Edges: {}", edge_count(&graph));
        println!("Sinks: {}", isolated);
    }
    Ok(())
}

/// List every node reachable from `start`, in visitation order.
pub fn cmd_reach(
    path: &Path,
    start: &str,
    strategy: TraversalStrategy,
    json: bool,
) -> TraverseResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let order = reachable_from(strategy, &graph, start.to_string(), PresentItem::new)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "strategy": strategy.name(),
                "visited": order,
            })
        );
    } else if order.is_empty() {
        println!("Node {} not found", start);
    } else {
        println!("Reached {} nodes from {} ({}):", order.len(), start, strategy);
        for (i, node) in order.iter().enumerate() {
            println!("  {:>4}. {}", i + 1, node);
        }
    }
    Ok(())
}

/// Report whether `dst` is reachable from `src`.
pub fn cmd_has_path(
    path: &Path,
    src: &str,
    dst: &str,
    strategy: TraversalStrategy,
    json: bool,
) -> TraverseResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let found = has_path(
        strategy,
        &graph,
        src.to_string(),
        dst.to_string(),
        PresentItem::new,
    )?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "src": src,
                "dst": dst,
                "strategy": strategy.name(),
                "has_path": found,
            })
        );
    } else if found {
        println!("Path found: {} -> {}", src, dst);
    } else {
        println!("No path: {} -> {}", src, dst);
    }
    Ok(())
}

/// Count connected components.
pub fn cmd_components(path: &Path, strategy: TraversalStrategy, json: bool) -> TraverseResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let count = connected_components_count(strategy, &graph, PresentItem::new)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "strategy": strategy.name(),
                "components": count,
            })
        );
    } else {
        println!("Components: {}", count);
    }
    Ok(())
}

/// Print the n-th Fibonacci number.
pub fn cmd_fib(n: u32, json: bool) -> TraverseResult<()> {
    let value = dp::fib(n);
    if json {
        // u128 does not fit a JSON number.
        println!(
            "{}",
            serde_json::json!({"n": n, "fib": value.map(|v| v.to_string())})
        );
    } else {
        match value {
            Some(v) => println!("fib({}) = {}", n, v),
            None => println!("fib({}) overflows u128", n),
        }
    }
    Ok(())
}

/// Print the number of grid paths.
pub fn cmd_grid(rows: u32, cols: u32, json: bool) -> TraverseResult<()> {
    let value = dp::grid_traveler(rows, cols);
    if json {
        println!(
            "{}",
            serde_json::json!({"rows": rows, "cols": cols, "paths": value})
        );
    } else {
        match value {
            Some(v) => println!("grid({}, {}) = {}", rows, cols, v),
            None => println!("grid({}, {}) overflows u64", rows, cols),
        }
    }
    Ok(())
}

/// Print whether `target` is a sum of `numbers`.
pub fn cmd_can_sum(target: u64, numbers: &[u64], json: bool) -> TraverseResult<()> {
    let result = dp::can_sum(target, numbers);
    if json {
        println!(
            "{}",
            serde_json::json!({"target": target, "numbers": numbers, "can_sum": result})
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}

/// Print one combination of `numbers` summing to `target`.
pub fn cmd_how_sum(target: u64, numbers: &[u64], json: bool) -> TraverseResult<()> {
    let result = dp::how_sum(target, numbers);
    if json {
        println!(
            "{}",
            serde_json::json!({"target": target, "numbers": numbers, "how_sum": result})
        );
    } else {
        match result {
            Some(combination) => {
                let parts: Vec<String> = combination.iter().map(u64::to_string).collect();
                println!("{} = {}", target, parts.join(" + "));
            }
            None => println!("none"),
        }
    }
    Ok(())
}
