//! Memoized dynamic-programming routines.
//!
//! Every function either creates its own [`Memo`] or takes one from the caller,
//! so nothing is shared between unrelated calls.

pub mod counting;
pub mod memo;
pub mod sum;

pub use counting::{fib, fib_with, grid_traveler, grid_traveler_with};
pub use memo::Memo;
pub use sum::{can_sum, can_sum_with, how_sum, how_sum_with};
