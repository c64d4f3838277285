//! Error types for the graph-transport library.

use thiserror::Error;

/// Which ordered container raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// LIFO container.
    Stack,
    /// FIFO container.
    Queue,
    /// Positional list.
    LinkedList,
}

impl ContainerKind {
    /// Return a human-readable name for this container.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::LinkedList => "linked list",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the graph-transport library.
#[derive(Error, Debug)]
pub enum TraverseError {
    /// An empty (sentinel) item was offered to a container.
    #[error("Element cannot be nil or empty")]
    InvalidElement,

    /// Removal was attempted on an empty container.
    #[error("The {0} is empty")]
    EmptyContainer(ContainerKind),

    /// A position past the end of a positional container.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A traversal strategy name or code that maps to no strategy.
    #[error("Unsupported traversal strategy: {0}")]
    UnsupportedStrategy(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A graph file that could not be parsed or is structurally wrong.
    #[error("Invalid graph file: {0}")]
    InvalidGraphFile(String),
}

/// Convenience result type for graph-transport operations.
pub type TraverseResult<T> = Result<T, TraverseError>;
