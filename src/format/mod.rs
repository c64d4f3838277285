//! Graph file I/O.

pub mod graph_file;
pub mod reader;

pub use graph_file::{edge_count, GraphFile};
pub use reader::GraphReader;
