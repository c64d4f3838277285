//! Graph construction and strategy-agnostic traversal algorithms.

pub mod builder;
pub mod components;
pub mod path;
pub mod transporter;
pub mod traversal;
pub mod visited;

pub use builder::{graph_from_edges, GraphBuilder};
pub use components::connected_components_count;
pub use path::has_path;
pub use transporter::{new_transporter, QueueTransporter, StackTransporter, Transport, Transporter};
pub use traversal::{breadth_first, depth_first, reachable_from};
pub use visited::VisitedSet;
