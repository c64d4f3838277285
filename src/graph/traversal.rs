//! The shared traversal loop and reachability collection.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::types::{Graph, Item, TraversalStrategy, TraverseResult};

use super::transporter::{new_transporter, Transporter};
use super::visited::VisitedSet;

/// Drive one walk from `start` until the transporter drains or `on_discover` breaks.
///
/// A node is marked and reported to `on_visit` when it leaves the transporter,
/// not when it enters, so the same node can be pending several times. Neighbors
/// without a graph entry are never added. Returns `Break` if `on_discover`
/// stopped the walk early.
pub(crate) fn walk<N, T, V, D>(
    graph: &Graph<N>,
    transporter: &mut T,
    start: N,
    visited: &mut VisitedSet<N>,
    mut on_visit: V,
    mut on_discover: D,
) -> TraverseResult<ControlFlow<()>>
where
    N: Eq + Hash + Clone,
    T: Transporter,
    T::Item: Item<Value = N>,
    V: FnMut(&N),
    D: FnMut(&N) -> ControlFlow<()>,
{
    transporter.add(start)?;

    while !transporter.is_empty() {
        let current = transporter.next()?.into_value();

        let Some(neighbors) = graph.get(&current) else {
            continue;
        };
        if !visited.insert(current.clone()) {
            continue;
        }
        on_visit(&current);

        for neighbor in neighbors {
            if visited.contains(neighbor) || !graph.contains_key(neighbor) {
                continue;
            }
            if on_discover(neighbor).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            transporter.add(neighbor.clone())?;
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Every node reachable from `start`, in visitation order.
///
/// The order depends on `strategy`; the set of nodes does not. An empty result
/// means `start` wraps to an empty item or has no entry in `graph`.
pub fn reachable_from<N, I, F>(
    strategy: TraversalStrategy,
    graph: &Graph<N>,
    start: N,
    factory: F,
) -> TraverseResult<Vec<N>>
where
    N: Eq + Hash + Clone,
    I: Item<Value = N>,
    F: Fn(N) -> I,
{
    if factory(start.clone()).is_empty() || !graph.contains_key(&start) {
        return Ok(Vec::new());
    }

    let mut transporter = new_transporter(strategy, factory);
    let mut visited = VisitedSet::new();
    let mut order = Vec::new();

    // Without an early-exit hook the walk always runs to completion.
    let _ = walk(
        graph,
        &mut transporter,
        start,
        &mut visited,
        |node| {
            log::trace!("{} visit #{}", strategy, order.len());
            order.push(node.clone());
        },
        |_| ControlFlow::Continue(()),
    )?;

    log::debug!(
        "{} traversal reached {} of {} nodes",
        strategy,
        order.len(),
        graph.len()
    );
    Ok(order)
}

/// Reachability with a stack transporter (depth-first order).
pub fn depth_first<N, I, F>(graph: &Graph<N>, start: N, factory: F) -> TraverseResult<Vec<N>>
where
    N: Eq + Hash + Clone,
    I: Item<Value = N>,
    F: Fn(N) -> I,
{
    reachable_from(TraversalStrategy::Stack, graph, start, factory)
}

/// Reachability with a queue transporter (breadth-first order).
pub fn breadth_first<N, I, F>(graph: &Graph<N>, start: N, factory: F) -> TraverseResult<Vec<N>>
where
    N: Eq + Hash + Clone,
    I: Item<Value = N>,
    F: Fn(N) -> I,
{
    reachable_from(TraversalStrategy::Queue, graph, start, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PresentItem, TraverseError, ValueItem};

    fn chain() -> Graph<String> {
        [("a", vec!["b", "c"]), ("b", vec!["d"]), ("c", vec!["d"]), ("d", vec![])]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
            .collect()
    }

    #[test]
    fn depth_first_order() {
        let order = depth_first(&chain(), "a".to_string(), ValueItem::new).unwrap();
        assert_eq!(order, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn breadth_first_order() {
        let order = breadth_first(&chain(), "a".to_string(), ValueItem::new).unwrap();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn missing_or_empty_start_yields_nothing() {
        let g = chain();
        assert!(depth_first(&g, "z".to_string(), ValueItem::new).unwrap().is_empty());
        assert!(breadth_first(&g, String::new(), ValueItem::new).unwrap().is_empty());
    }

    #[test]
    fn default_valued_neighbor_aborts_with_value_items() {
        let g: Graph<u32> = [(1, vec![0]), (0, vec![])].into_iter().collect();
        let err = reachable_from(TraversalStrategy::Queue, &g, 1, ValueItem::new).unwrap_err();
        assert!(matches!(err, TraverseError::InvalidElement));

        let order = reachable_from(TraversalStrategy::Queue, &g, 1, PresentItem::new).unwrap();
        assert_eq!(order, vec![1, 0]);
    }
}
