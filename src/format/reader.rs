//! Reads graph files into adjacency lists.

use std::io::Read;
use std::path::Path;

use crate::types::{Graph, TraverseResult};

use super::graph_file::GraphFile;

/// Reader for JSON graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file from disk.
    pub fn read_from_file(path: &Path) -> TraverseResult<Graph<String>> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        GraphFile::from_json(&text)?.into_graph()
    }

    /// Read a graph file from any reader.
    pub fn read_from(reader: &mut impl Read) -> TraverseResult<Graph<String>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        GraphFile::from_json(&text)?.into_graph()
    }
}
