//! Fibonacci and grid-path counting.

use super::memo::Memo;

/// Largest `n` whose Fibonacci number fits in a `u128`.
const FIB_MAX_INDEX: u32 = 186;

/// `grid_traveler(35, 35)` already exceeds `u64::MAX`, and counts only grow
/// with either side.
const GRID_MAX_SHORT_SIDE: u32 = 34;

/// The n-th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// Returns `None` once the result no longer fits in a `u128` (n > 186).
pub fn fib(n: u32) -> Option<u128> {
    fib_with(&mut Memo::new(), n)
}

/// [`fib`] with a caller-owned memo table.
pub fn fib_with(memo: &mut Memo<u32, Option<u128>>, n: u32) -> Option<u128> {
    if n <= 1 {
        return Some(u128::from(n));
    }
    if n > FIB_MAX_INDEX {
        return None;
    }
    if let Some(cached) = memo.get(&n) {
        return cached;
    }
    // Bottom-up, so large n needs no recursion.
    let mut prev = Some(0u128);
    let mut curr = Some(1u128);
    for i in 2..=n {
        let next = match memo.get(&i) {
            Some(cached) => cached,
            None => {
                let value = match (prev, curr) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                memo.store(i, value)
            }
        };
        prev = curr;
        curr = next;
    }
    curr
}

/// Number of ways to travel from the top-left to the bottom-right corner of a
/// `rows` x `cols` grid moving only right or down.
///
/// Zero when either side is zero. Returns `None` on `u64` overflow.
pub fn grid_traveler(rows: u32, cols: u32) -> Option<u64> {
    grid_traveler_with(&mut Memo::new(), rows, cols)
}

/// [`grid_traveler`] with a caller-owned memo table.
///
/// Entries are keyed by `(short side, long side)`. A call caches every grid with
/// the same long side and a shorter or equal short side.
pub fn grid_traveler_with(
    memo: &mut Memo<(u32, u32), Option<u64>>,
    rows: u32,
    cols: u32,
) -> Option<u64> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    let (short, long) = (rows.min(cols), rows.max(cols));
    if short == 1 {
        return Some(1);
    }
    if short > GRID_MAX_SHORT_SIDE {
        return None;
    }
    if let Some(cached) = memo.get(&(short, long)) {
        return cached;
    }

    // column[k] is the count for a (k + 1) x width grid as width grows to `long`.
    let mut column = vec![Some(1u64); short as usize];
    let last = column.len() - 1;
    for _ in 2..=long {
        for k in 1..column.len() {
            column[k] = match (column[k - 1], column[k]) {
                (Some(above), Some(left)) => above.checked_add(left),
                _ => None,
            };
        }
        if column[last].is_none() {
            return memo.store((short, long), None);
        }
    }

    for (k, count) in column.iter().enumerate().skip(1) {
        memo.store((k as u32 + 1, long), *count);
    }
    column[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_values() {
        assert_eq!(fib(0), Some(0));
        assert_eq!(fib(1), Some(1));
        assert_eq!(fib(6), Some(8));
        assert_eq!(fib(50), Some(12_586_269_025));
        assert!(fib(186).is_some());
        assert_eq!(fib(187), None);
    }

    #[test]
    fn fib_memo_is_reusable() {
        let mut memo = Memo::new();
        assert_eq!(fib_with(&mut memo, 10), Some(55));
        let filled = memo.len();
        assert_eq!(fib_with(&mut memo, 8), Some(21));
        assert_eq!(memo.len(), filled);
    }

    #[test]
    fn grid_values() {
        assert_eq!(grid_traveler(0, 5), Some(0));
        assert_eq!(grid_traveler(1, 1), Some(1));
        assert_eq!(grid_traveler(2, 3), Some(3));
        assert_eq!(grid_traveler(3, 3), Some(6));
        assert_eq!(grid_traveler(18, 18), Some(2_333_606_220));
    }

    #[test]
    fn grid_overflow_bound() {
        assert_eq!(grid_traveler(34, 34), Some(7_219_428_434_016_265_740));
        assert_eq!(grid_traveler(35, 35), None);
        assert_eq!(grid_traveler(35, 2), Some(35));
        assert_eq!(grid_traveler(40, 400), None);
    }
}
