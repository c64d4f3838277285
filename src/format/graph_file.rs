//! JSON graph files.
//!
//! Two shapes are accepted, with string node ids:
//!
//! ```json
//! { "kind": "bidirectional", "edges": [["a", "b"], ["b", "c"]] }
//! { "adjacency": { "a": ["b"], "b": [] } }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::graph::GraphBuilder;
use crate::types::{Graph, GraphKind, TraverseError, TraverseResult};

/// On-disk description of a graph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// How to read `edges`. Ignored for `adjacency`.
    #[serde(default)]
    pub kind: GraphKind,
    /// Edge list, each entry `[src, dst]`. Entries of other lengths are skipped.
    #[serde(default)]
    pub edges: Option<Vec<Vec<String>>>,
    /// Explicit adjacency list.
    #[serde(default)]
    pub adjacency: Option<HashMap<String, Vec<String>>>,
}

impl GraphFile {
    /// Parse a graph file from JSON text.
    pub fn from_json(text: &str) -> TraverseResult<Self> {
        serde_json::from_str(text).map_err(|e| TraverseError::InvalidGraphFile(e.to_string()))
    }

    /// Turn the description into an adjacency list.
    pub fn into_graph(self) -> TraverseResult<Graph<String>> {
        match (self.edges, self.adjacency) {
            (Some(edges), None) => {
                let mut builder = GraphBuilder::with_kind(self.kind);
                builder.edges(&edges);
                if builder.edge_count() < edges.len() {
                    log::warn!(
                        "Skipped {} edges without exactly two endpoints",
                        edges.len() - builder.edge_count()
                    );
                }
                Ok(builder.build())
            }
            (None, Some(adjacency)) => Ok(adjacency),
            (Some(_), Some(_)) => Err(TraverseError::InvalidGraphFile(
                "both \"edges\" and \"adjacency\" are present".to_string(),
            )),
            (None, None) => Err(TraverseError::InvalidGraphFile(
                "expected \"edges\" or \"adjacency\"".to_string(),
            )),
        }
    }
}

/// Number of directed edges stored in an adjacency list.
pub fn edge_count<N>(graph: &Graph<N>) -> usize {
    graph.values().map(Vec::len).sum()
}
