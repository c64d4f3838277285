//! Shared types for the graph-transport library.

pub mod error;
pub mod item;
pub mod strategy;

use std::collections::HashMap;

pub use error::{ContainerKind, TraverseError, TraverseResult};
pub use item::{Item, PresentItem, ValueItem};
pub use strategy::{GraphKind, TraversalStrategy};

/// Adjacency list: node id -> ordered neighbor ids.
///
/// A node without an entry does not exist, which is different from a node whose
/// entry is an empty list.
pub type Graph<N> = HashMap<N, Vec<N>>;
