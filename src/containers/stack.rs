//! LIFO container of items.

use crate::types::{ContainerKind, Item, TraverseError, TraverseResult};

/// Generic last-in-first-out container. Never holds an empty item.
#[derive(Debug, Clone)]
pub struct Stack<I> {
    elements: Vec<I>,
}

impl<I: Item> Stack<I> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Push an item onto the top. Fails with `InvalidElement` for an empty item.
    pub fn push(&mut self, element: I) -> TraverseResult<()> {
        if element.is_empty() {
            return Err(TraverseError::InvalidElement);
        }
        self.elements.push(element);
        Ok(())
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> TraverseResult<I> {
        self.elements
            .pop()
            .ok_or(TraverseError::EmptyContainer(ContainerKind::Stack))
    }

    /// The top item, without removing it.
    pub fn peek(&self) -> Option<&I> {
        self.elements.last()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Snapshot of the items, bottom first.
    pub fn to_vec(&self) -> Vec<I> {
        self.elements.clone()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.elements.iter()
    }

    /// Whether an equal item is stored. Always false for an empty item.
    pub fn contains(&self, element: &I) -> bool {
        if element.is_empty() {
            return false;
        }
        self.elements.iter().any(|curr| curr.equals(element))
    }
}

impl<I: Item> Default for Stack<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Item> IntoIterator for &'a Stack<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
