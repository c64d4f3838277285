//! Path existence between two nodes.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::types::{Graph, Item, TraversalStrategy, TraverseResult};

use super::transporter::new_transporter;
use super::traversal::walk;
use super::visited::VisitedSet;

/// Whether `dst` can be reached from `src`.
///
/// Returns `Ok(false)` when either endpoint has no entry in `graph`, and
/// `Ok(true)` when `src == dst`. The walk stops as soon as `dst` shows up among
/// a visited node's neighbors.
pub fn has_path<N, I, F>(
    strategy: TraversalStrategy,
    graph: &Graph<N>,
    src: N,
    dst: N,
    factory: F,
) -> TraverseResult<bool>
where
    N: Eq + Hash + Clone,
    I: Item<Value = N>,
    F: Fn(N) -> I,
{
    if !graph.contains_key(&src) || !graph.contains_key(&dst) {
        return Ok(false);
    }
    if src == dst {
        return Ok(true);
    }

    let mut transporter = new_transporter(strategy, factory);
    let mut visited = VisitedSet::new();

    let outcome = walk(
        graph,
        &mut transporter,
        src,
        &mut visited,
        |_| {},
        |neighbor| {
            if *neighbor == dst {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    )?;

    log::debug!(
        "{} path search visited {} nodes, found={}",
        strategy,
        visited.len(),
        outcome.is_break()
    );
    Ok(outcome.is_break())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueItem;

    fn graph(entries: &[(&str, &[&str])]) -> Graph<String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn cycle_does_not_loop() {
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        for s in TraversalStrategy::ALL {
            assert!(has_path(s, &g, "A".into(), "C".into(), ValueItem::new).unwrap());
            assert!(has_path(s, &g, "C".into(), "B".into(), ValueItem::new).unwrap());
        }
    }

    #[test]
    fn direction_matters() {
        let g = graph(&[("A", &["B"]), ("B", &[])]);
        for s in TraversalStrategy::ALL {
            assert!(has_path(s, &g, "A".into(), "B".into(), ValueItem::new).unwrap());
            assert!(!has_path(s, &g, "B".into(), "A".into(), ValueItem::new).unwrap());
        }
    }

    #[test]
    fn neighbor_without_entry_is_skipped() {
        let g = graph(&[("A", &["X", "B"]), ("B", &["C"]), ("C", &[])]);
        for s in TraversalStrategy::ALL {
            assert!(has_path(s, &g, "A".into(), "C".into(), ValueItem::new).unwrap());
            assert!(!has_path(s, &g, "A".into(), "X".into(), ValueItem::new).unwrap());
        }
    }
}
