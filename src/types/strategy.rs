//! Traversal strategy and graph kind enums.

use std::str::FromStr;

use serde::Deserialize;

use super::TraverseError;

/// Order in which pending nodes leave the transporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TraversalStrategy {
    /// Last in, first out. Depth-first-like exploration.
    Stack = 0,
    /// First in, first out. Breadth-first-like exploration.
    Queue = 1,
}

impl TraversalStrategy {
    /// Both strategies, in declaration order.
    pub const ALL: [TraversalStrategy; 2] = [Self::Stack, Self::Queue];

    /// Convert a u8 value to a strategy, returning None for unknown codes.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Stack),
            1 => Some(Self::Queue),
            _ => None,
        }
    }

    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "stack" | "dfs" | "depth" | "depth_first" => Some(Self::Stack),
            "queue" | "bfs" | "breadth" | "breadth_first" => Some(Self::Queue),
            _ => None,
        }
    }
}

impl FromStr for TraversalStrategy {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TraverseError::UnsupportedStrategy(s.to_string()))
    }
}

impl std::fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether edges read from an edge list are one-way or two-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// `[a, b]` means a -> b only.
    #[default]
    Directional,
    /// `[a, b]` means a -> b and b -> a.
    Bidirectional,
}

impl GraphKind {
    /// Return a human-readable name for this graph kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directional => "directional",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
