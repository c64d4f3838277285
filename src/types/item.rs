//! The item contract shared by every container, plus the two stock items.
//!
//! Containers and traversal code never build items themselves. They receive a
//! factory, any `Fn(T) -> I` where `I: Item<Value = T>`, and call it whenever a
//! raw value has to enter a container.

use std::fmt::Debug;

/// A value that can be stored in a [`Stack`](crate::containers::Stack) or a
/// [`Queue`](crate::containers::Queue).
pub trait Item: Clone + Debug {
    /// The wrapped value type.
    type Value;

    /// Whether two items wrap equal values.
    fn equals(&self, other: &Self) -> bool;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Consume the item and return the wrapped value.
    fn into_value(self) -> Self::Value;

    /// Whether this item is the "no value" sentinel. Containers refuse such items.
    fn is_empty(&self) -> bool;
}

/// Item whose sentinel is the value type's default.
///
/// `0`, `""` and `false` all count as empty, so a graph whose node ids include a
/// default value cannot be traversed with this item. Use [`PresentItem`] when the
/// default value is a legitimate payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueItem<T> {
    value: T,
}

impl<T> ValueItem<T> {
    /// Wrap a value. Usable directly as an item factory.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Item for ValueItem<T>
where
    T: Clone + Debug + Default + PartialEq,
{
    type Value = T;

    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }

    fn is_empty(&self) -> bool {
        self.value == T::default()
    }
}

/// Item that is never empty.
///
/// Absence is reported by the containers themselves (`Result` from pop/dequeue,
/// `Option` from peek), so every value, default or not, is storable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresentItem<T> {
    value: T,
}

impl<T> PresentItem<T> {
    /// Wrap a value. Usable directly as an item factory.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Item for PresentItem<T>
where
    T: Clone + Debug + PartialEq,
{
    type Value = T;

    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }

    fn is_empty(&self) -> bool {
        false
    }
}
