//! Fluent API for building adjacency lists from edges.

use std::hash::Hash;

use crate::types::{Graph, GraphKind};

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<N> {
    kind: GraphKind,
    graph: Graph<N>,
    edge_count: usize,
}

impl<N: Eq + Hash + Clone> GraphBuilder<N> {
    /// Create a new builder for one-way edges.
    pub fn new() -> Self {
        Self::with_kind(GraphKind::Directional)
    }

    /// Create a new builder with a specific graph kind.
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            graph: Graph::new(),
            edge_count: 0,
        }
    }

    /// Register a node with no edges. No-op if it already exists.
    pub fn node(&mut self, node: N) -> &mut Self {
        self.graph.entry(node).or_default();
        self
    }

    /// Add an edge. Both endpoints become nodes.
    pub fn edge(&mut self, src: N, dst: N) -> &mut Self {
        self.graph.entry(dst.clone()).or_default();
        self.graph.entry(src.clone()).or_default().push(dst.clone());
        if self.kind == GraphKind::Bidirectional {
            self.graph.entry(dst).or_default().push(src);
        }
        self.edge_count += 1;
        self
    }

    /// Add every two-element edge in `edges`, skipping any other length.
    pub fn edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> &mut Self
    where
        E: AsRef<[N]>,
    {
        for edge in edges {
            match edge.as_ref() {
                [src, dst] => {
                    self.edge(src.clone(), dst.clone());
                }
                other => log::debug!("skipping edge with {} endpoints", other.len()),
            }
        }
        self
    }

    /// Number of edges accepted so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Build the final graph.
    pub fn build(self) -> Graph<N> {
        self.graph
    }
}

impl<N: Eq + Hash + Clone> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adjacency list from an edge list, where `edge[0]` is the source and
/// `edge[1]` the destination. Edges without exactly two endpoints are skipped.
pub fn graph_from_edges<N, E>(edges: impl IntoIterator<Item = E>, kind: GraphKind) -> Graph<N>
where
    N: Eq + Hash + Clone,
    E: AsRef<[N]>,
{
    let mut builder = GraphBuilder::with_kind(kind);
    builder.edges(edges);
    builder.build()
}
