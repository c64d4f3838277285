//! Strategy-polymorphic adapters over [`Stack`] and [`Queue`].
//!
//! Algorithms only see the [`Transporter`] trait: `add` a raw value, take the
//! `next` item, ask `is_empty`. Which container sits underneath decides whether
//! the walk is depth-first-like or breadth-first-like.

use crate::containers::{Queue, Stack};
use crate::types::{Item, TraversalStrategy, TraverseResult};

/// Uniform add/next/is_empty interface over an ordered container.
pub trait Transporter {
    /// Item type stored in the underlying container.
    type Item: Item;

    /// Remove the next pending item. Propagates the container's `EmptyContainer` error.
    fn next(&mut self) -> TraverseResult<Self::Item>;

    /// Wrap a raw value with the factory and insert it. Propagates `InvalidElement`.
    fn add(&mut self, value: <Self::Item as Item>::Value) -> TraverseResult<()>;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool;
}

/// Transporter backed by a [`Stack`].
pub struct StackTransporter<I, F> {
    stack: Stack<I>,
    factory: F,
}

impl<T, I, F> StackTransporter<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    /// Create an empty stack transporter.
    pub fn new(factory: F) -> Self {
        Self {
            stack: Stack::new(),
            factory,
        }
    }
}

impl<T, I, F> Transporter for StackTransporter<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    type Item = I;

    fn next(&mut self) -> TraverseResult<I> {
        self.stack.pop()
    }

    fn add(&mut self, value: T) -> TraverseResult<()> {
        self.stack.push((self.factory)(value))
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Transporter backed by a [`Queue`].
pub struct QueueTransporter<I, F> {
    queue: Queue<I>,
    factory: F,
}

impl<T, I, F> QueueTransporter<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    /// Create an empty queue transporter.
    pub fn new(factory: F) -> Self {
        Self {
            queue: Queue::new(),
            factory,
        }
    }
}

impl<T, I, F> Transporter for QueueTransporter<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    type Item = I;

    fn next(&mut self) -> TraverseResult<I> {
        self.queue.dequeue()
    }

    fn add(&mut self, value: T) -> TraverseResult<()> {
        self.queue.enqueue((self.factory)(value))
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// The transporter chosen for a [`TraversalStrategy`].
pub enum Transport<I, F> {
    /// LIFO variant.
    Stack(StackTransporter<I, F>),
    /// FIFO variant.
    Queue(QueueTransporter<I, F>),
}

impl<I, F> Transport<I, F> {
    /// The strategy this transporter implements.
    pub fn strategy(&self) -> TraversalStrategy {
        match self {
            Self::Stack(_) => TraversalStrategy::Stack,
            Self::Queue(_) => TraversalStrategy::Queue,
        }
    }
}

impl<T, I, F> Transporter for Transport<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    type Item = I;

    fn next(&mut self) -> TraverseResult<I> {
        match self {
            Self::Stack(t) => t.next(),
            Self::Queue(t) => t.next(),
        }
    }

    fn add(&mut self, value: T) -> TraverseResult<()> {
        match self {
            Self::Stack(t) => t.add(value),
            Self::Queue(t) => t.add(value),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Stack(t) => t.is_empty(),
            Self::Queue(t) => t.is_empty(),
        }
    }
}

/// Build the transporter matching `strategy` around `factory`.
pub fn new_transporter<T, I, F>(strategy: TraversalStrategy, factory: F) -> Transport<I, F>
where
    I: Item<Value = T>,
    F: Fn(T) -> I,
{
    match strategy {
        TraversalStrategy::Stack => Transport::Stack(StackTransporter::new(factory)),
        TraversalStrategy::Queue => Transport::Queue(QueueTransporter::new(factory)),
    }
}
