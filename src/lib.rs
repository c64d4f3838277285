//! graph-transport: strategy-agnostic graph traversal.
//!
//! Reachability, path existence and connected-component counting are written
//! once against a [`Transporter`], an add/next/is_empty adapter over either a
//! [`Stack`] (depth-first-like order) or a [`Queue`] (breadth-first-like order).
//! Values enter containers through an item factory, so the algorithms are
//! generic over the node type and never build items themselves.

pub mod cli;
pub mod containers;
pub mod dp;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use containers::{LinkedList, Queue, Stack};
pub use dp::{can_sum, fib, grid_traveler, how_sum, Memo};
pub use format::{GraphFile, GraphReader};
pub use graph::{
    breadth_first, connected_components_count, depth_first, graph_from_edges, has_path,
    new_transporter, reachable_from, GraphBuilder, Transport, Transporter, VisitedSet,
};
pub use types::{
    ContainerKind, Graph, GraphKind, Item, PresentItem, TraversalStrategy, TraverseError,
    TraverseResult, ValueItem,
};
