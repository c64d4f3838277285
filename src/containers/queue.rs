//! FIFO container of items.

use std::collections::VecDeque;

use crate::types::{ContainerKind, Item, TraverseError, TraverseResult};

/// Generic first-in-first-out container. Never holds an empty item.
///
/// Backed by a ring buffer, so `dequeue` is O(1) and the consumed head region is
/// reused instead of accumulating.
#[derive(Debug, Clone)]
pub struct Queue<I> {
    elements: VecDeque<I>,
}

impl<I: Item> Queue<I> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an item at the back. Fails with `InvalidElement` for an empty item.
    pub fn enqueue(&mut self, element: I) -> TraverseResult<()> {
        if element.is_empty() {
            return Err(TraverseError::InvalidElement);
        }
        self.elements.push_back(element);
        Ok(())
    }

    /// Remove and return the front item.
    pub fn dequeue(&mut self) -> TraverseResult<I> {
        self.elements
            .pop_front()
            .ok_or(TraverseError::EmptyContainer(ContainerKind::Queue))
    }

    /// The front item, without removing it.
    pub fn peek(&self) -> Option<&I> {
        self.elements.front()
    }

    /// Whether the queue holds no items.
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

    /// Snapshot of the items, front first.
    pub fn to_vec(&self) -> Vec<I> {
        self.elements.iter().cloned().collect()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, I> {
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

impl<I: Item> Default for Queue<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Item> IntoIterator for &'a Queue<I> {
    type Item = &'a I;
    type IntoIter = std::collections::vec_deque::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueItem;

    fn item(s: &str) -> ValueItem<String> {
        ValueItem::new(s.to_string())
    }

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(item("element1")).unwrap();
        queue.enqueue(item("element2")).unwrap();
        assert_eq!(queue.dequeue().unwrap().into_value(), "element1");
        assert_eq!(queue.dequeue().unwrap().into_value(), "element2");
        assert!(matches!(
            queue.dequeue(),
            Err(TraverseError::EmptyContainer(ContainerKind::Queue))
        ));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_item_rejected() {
        let mut queue: Queue<ValueItem<String>> = Queue::new();
        assert!(matches!(queue.enqueue(item("")), Err(TraverseError::InvalidElement)));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut queue = Queue::with_capacity(2);
        for round in 0..10 {
            queue.enqueue(ValueItem::new(round * 2 + 1)).unwrap();
            queue.enqueue(ValueItem::new(round * 2 + 2)).unwrap();
            assert_eq!(queue.dequeue().unwrap().into_value(), round + 1);
        }
        assert_eq!(queue.len(), 10);
        assert_eq!(queue.peek().map(|i| *i.value()), Some(11));
        let snapshot: Vec<i32> = queue.iter().map(|i| *i.value()).collect();
        assert_eq!(snapshot, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn contains_skips_empty_item() {
        let mut queue = Queue::new();
        queue.enqueue(item("a")).unwrap();
        assert!(queue.contains(&item("a")));
        assert!(!queue.contains(&item("")));
        queue.clear();
        assert!(queue.to_vec().is_empty());
    }
}
