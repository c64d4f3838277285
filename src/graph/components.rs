//! Connected-component counting.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::types::{Graph, Item, TraversalStrategy, TraverseResult};

use super::transporter::new_transporter;
use super::traversal::walk;
use super::visited::VisitedSet;

/// Number of groups of graph keys connected by edges.
///
/// Each key not yet visited starts a fresh walk; every walk shares one visited
/// set and adds one to the count. The result is the same for both strategies.
/// Edges are followed as stored, so pass a bidirectional graph to count
/// undirected components.
pub fn connected_components_count<N, I, F>(
    strategy: TraversalStrategy,
    graph: &Graph<N>,
    factory: F,
) -> TraverseResult<usize>
where
    N: Eq + Hash + Clone,
    I: Item<Value = N>,
    F: Fn(N) -> I,
{
    if graph.is_empty() {
        return Ok(0);
    }

    let mut transporter = new_transporter(strategy, factory);
    let mut visited = VisitedSet::new();
    let mut count = 0;

    for node in graph.keys() {
        if visited.contains(node) {
            continue;
        }
        count += 1;
        // Without an early-exit hook the walk always runs to completion.
        let _ = walk(
            graph,
            &mut transporter,
            node.clone(),
            &mut visited,
            |_| {},
            |_| ControlFlow::Continue(()),
        )?;
    }

    log::debug!(
        "{} component scan found {} components over {} nodes",
        strategy,
        count,
        graph.len()
    );
    Ok(count)
}
