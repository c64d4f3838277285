//! Positional doubly linked list of items.
//!
//! Nodes live in a slot vector and link to each other by index. Removed slots
//! go on a free list and are reused by later insertions.

use crate::types::{ContainerKind, Item, TraverseError, TraverseResult};

#[derive(Debug, Clone)]
enum Slot<I> {
    Occupied {
        item: I,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Free(Option<usize>),
}

/// Doubly linked list with O(1) insertion and removal at both ends and
/// O(n) positional access. Never holds an empty item.
#[derive(Debug, Clone)]
pub struct LinkedList<I> {
    slots: Vec<Slot<I>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<I: Item> LinkedList<I> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// The first item, if any.
    pub fn first(&self) -> Option<&I> {
        self.head.and_then(|idx| self.item(idx))
    }

    /// The last item, if any.
    pub fn last(&self) -> Option<&I> {
        self.tail.and_then(|idx| self.item(idx))
    }

    /// Insert at the front. Fails with `InvalidElement` for an empty item.
    pub fn add_first(&mut self, element: I) -> TraverseResult<()> {
        Self::check(&element)?;
        self.insert_between(element, None, self.head);
        Ok(())
    }

    /// Insert at the back. Fails with `InvalidElement` for an empty item.
    pub fn add_last(&mut self, element: I) -> TraverseResult<()> {
        Self::check(&element)?;
        self.insert_between(element, self.tail, None);
        Ok(())
    }

    /// Insert so that the new item ends up at `index`.
    ///
    /// `index == len()` appends. A larger index fails with `IndexOutOfRange`
    /// and leaves the list unchanged.
    pub fn add_at(&mut self, index: usize, element: I) -> TraverseResult<()> {
        Self::check(&element)?;
        if index == self.len {
            self.insert_between(element, self.tail, None);
            return Ok(());
        }
        let next = self.slot_at(index).ok_or(TraverseError::IndexOutOfRange {
            index,
            len: self.len,
        })?;
        let (prev, _) = self.links(next);
        self.insert_between(element, prev, Some(next));
        Ok(())
    }

    /// Remove and return the first item.
    pub fn remove_first(&mut self) -> TraverseResult<I> {
        let head = self.head.ok_or(Self::empty())?;
        self.unlink(head).ok_or(Self::empty())
    }

    /// Remove and return the last item.
    pub fn remove_last(&mut self) -> TraverseResult<I> {
        let tail = self.tail.ok_or(Self::empty())?;
        self.unlink(tail).ok_or(Self::empty())
    }

    /// Remove and return the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> TraverseResult<I> {
        if self.is_empty() {
            return Err(Self::empty());
        }
        let out_of_range = TraverseError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let idx = self.slot_at(index).ok_or(out_of_range)?;
        self.unlink(idx).ok_or(Self::empty())
    }

    /// The item at `index`, walking from whichever end is closer.
    pub fn index_at(&self, index: usize) -> Option<&I> {
        self.slot_at(index).and_then(|idx| self.item(idx))
    }

    /// Whether an equal item is stored. Always false for an empty item.
    pub fn contains(&self, element: &I) -> bool {
        if element.is_empty() {
            return false;
        }
        self.iter().any(|curr| curr.equals(element))
    }

    /// Snapshot of the items, front first.
    pub fn to_vec(&self) -> Vec<I> {
        self.iter().cloned().collect()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn check(element: &I) -> TraverseResult<()> {
        if element.is_empty() {
            return Err(TraverseError::InvalidElement);
        }
        Ok(())
    }

    fn empty() -> TraverseError {
        TraverseError::EmptyContainer(ContainerKind::LinkedList)
    }

    fn item(&self, idx: usize) -> Option<&I> {
        match self.slots.get(idx)? {
            Slot::Occupied { item, .. } => Some(item),
            Slot::Free(_) => None,
        }
    }

    fn links(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match self.slots.get(idx) {
            Some(Slot::Occupied { prev, next, .. }) => (*prev, *next),
            _ => (None, None),
        }
    }

    fn set_prev(&mut self, idx: usize, value: Option<usize>) {
        if let Some(Slot::Occupied { prev, .. }) = self.slots.get_mut(idx) {
            *prev = value;
        }
    }

    fn set_next(&mut self, idx: usize, value: Option<usize>) {
        if let Some(Slot::Occupied { next, .. }) = self.slots.get_mut(idx) {
            *next = value;
        }
    }

    /// Slot index of the item at `position`.
    fn slot_at(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        if position < self.len / 2 {
            let mut idx = self.head?;
            for _ in 0..position {
                idx = self.links(idx).1?;
            }
            Some(idx)
        } else {
            let mut idx = self.tail?;
            for _ in 0..(self.len - 1 - position) {
                idx = self.links(idx).0?;
            }
            Some(idx)
        }
    }

    fn insert_between(&mut self, item: I, prev: Option<usize>, next: Option<usize>) {
        let slot = Slot::Occupied { item, prev, next };
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match &self.slots[idx] {
                    Slot::Free(following) => *following,
                    Slot::Occupied { .. } => None,
                };
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        match prev {
            Some(p) => self.set_next(p, Some(idx)),
            None => self.head = Some(idx),
        }
        match next {
            Some(n) => self.set_prev(n, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.len += 1;
    }

    fn unlink(&mut self, idx: usize) -> Option<I> {
        let (prev, next) = self.links(idx);
        let slot = std::mem::replace(self.slots.get_mut(idx)?, Slot::Free(self.free_head));
        let item = match slot {
            Slot::Occupied { item, .. } => item,
            free @ Slot::Free(_) => {
                // Not a live node; put the free-list entry back untouched.
                self.slots[idx] = free;
                return None;
            }
        };

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
        self.free_head = Some(idx);
        self.len -= 1;
        Some(item)
    }
}

impl<I: Item> Default for LinkedList<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`LinkedList`].
pub struct Iter<'a, I> {
    list: &'a LinkedList<I>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, I> Iterator for Iter<'a, I> {
    type Item = &'a I;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match self.list.slots.get(idx)? {
            Slot::Occupied { item, next, .. } => {
                self.current = *next;
                self.remaining -= 1;
                Some(item)
            }
            Slot::Free(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, I: Item> IntoIterator for &'a LinkedList<I> {
    type Item = &'a I;
    type IntoIter = Iter<'a, I>;

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

    fn values(list: &LinkedList<ValueItem<String>>) -> Vec<String> {
        list.iter().map(|i| i.value().clone()).collect()
    }

    #[test]
    fn add_at_both_ends() {
        let mut list = LinkedList::new();
        list.add_last(item("b")).unwrap();
        list.add_first(item("a")).unwrap();
        list.add_last(item("c")).unwrap();
        assert_eq!(values(&list), vec!["a", "b", "c"]);
        assert_eq!(list.first().map(|i| i.value().as_str()), Some("a"));
        assert_eq!(list.last().map(|i| i.value().as_str()), Some("c"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_from_both_ends() {
        let mut list = LinkedList::new();
        for s in ["a", "b", "c"] {
            list.add_last(item(s)).unwrap();
        }
        assert_eq!(list.remove_first().unwrap().into_value(), "a");
        assert_eq!(list.remove_last().unwrap().into_value(), "c");
        assert_eq!(list.remove_last().unwrap().into_value(), "b");
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(matches!(
            list.remove_first(),
            Err(TraverseError::EmptyContainer(ContainerKind::LinkedList))
        ));
    }

    #[test]
    fn positional_access() {
        let mut list = LinkedList::new();
        for s in ["a", "b", "d", "e"] {
            list.add_last(item(s)).unwrap();
        }
        list.add_at(2, item("c")).unwrap();
        list.add_at(5, item("f")).unwrap();
        list.add_at(0, item("_")).unwrap();
        assert_eq!(values(&list), vec!["_", "a", "b", "c", "d", "e", "f"]);

        assert_eq!(list.index_at(3).map(|i| i.value().as_str()), Some("c"));
        assert_eq!(list.index_at(6).map(|i| i.value().as_str()), Some("f"));
        assert!(list.index_at(7).is_none());

        assert_eq!(list.remove_at(0).unwrap().into_value(), "_");
        assert_eq!(list.remove_at(5).unwrap().into_value(), "f");
        assert_eq!(list.remove_at(2).unwrap().into_value(), "c");
        assert_eq!(values(&list), vec!["a", "b", "d", "e"]);
        assert_eq!(list.last().map(|i| i.value().as_str()), Some("e"));
    }

    #[test]
    fn out_of_range_leaves_list_unchanged() {
        let mut list = LinkedList::new();
        list.add_last(item("a")).unwrap();
        assert!(matches!(
            list.add_at(3, item("x")),
            Err(TraverseError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(matches!(
            list.remove_at(1),
            Err(TraverseError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(values(&list), vec!["a"]);
    }

    #[test]
    fn empty_item_rejected() {
        let mut list = LinkedList::new();
        assert!(matches!(list.add_first(item("")), Err(TraverseError::InvalidElement)));
        assert!(matches!(list.add_last(item("")), Err(TraverseError::InvalidElement)));
        assert!(matches!(list.add_at(0, item("")), Err(TraverseError::InvalidElement)));
        assert!(list.is_empty());
        assert!(!list.contains(&item("")));
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = LinkedList::new();
        for v in 1..=4 {
            list.add_last(ValueItem::new(v)).unwrap();
        }
        list.remove_at(1).unwrap();
        list.remove_first().unwrap();
        list.add_first(ValueItem::new(10)).unwrap();
        list.add_first(ValueItem::new(20)).unwrap();
        assert_eq!(list.slots.len(), 4);
        assert_eq!(
            list.to_vec().into_iter().map(Item::into_value).collect::<Vec<_>>(),
            vec![20, 10, 3, 4]
        );
        assert!(list.contains(&ValueItem::new(3)));
        list.clear();
        assert!(list.is_empty());
        assert!(list.iter().next().is_none());
    }
}
