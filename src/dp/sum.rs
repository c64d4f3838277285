//! Target-sum problems over a multiset of reusable numbers.

use super::memo::Memo;

/// Whether `target` can be written as a sum of elements of `numbers`, each
/// usable any number of times. `can_sum(0, _)` is always true.
///
/// Zeros in `numbers` never change the remaining target and are ignored.
pub fn can_sum(target: u64, numbers: &[u64]) -> bool {
    can_sum_with(&mut Memo::new(), target, numbers)
}

/// [`can_sum`] with a caller-owned memo table. The table must only be reused
/// with the same `numbers`.
pub fn can_sum_with(memo: &mut Memo<u64, bool>, target: u64, numbers: &[u64]) -> bool {
    if target == 0 {
        return true;
    }
    // Remainders waiting on a smaller remainder; each entry is strictly
    // smaller than the one beneath it.
    let mut pending = vec![target];
    while let Some(&current) = pending.last() {
        if memo.get(&current).is_some() {
            pending.pop();
            continue;
        }
        match next_remainder(current, numbers, |rest| memo.get(&rest)) {
            Resolution::Found(_) => {
                memo.store(current, true);
                pending.pop();
            }
            Resolution::Missing => {
                memo.store(current, false);
                pending.pop();
            }
            Resolution::Unknown(rest) => pending.push(rest),
        }
    }
    memo.get(&target).unwrap_or(false)
}

/// One combination of elements of `numbers` summing to `target`, or `None`.
///
/// The combination for `0` is empty. Elements may repeat; zeros are ignored.
pub fn how_sum(target: u64, numbers: &[u64]) -> Option<Vec<u64>> {
    how_sum_with(&mut Memo::new(), target, numbers)
}

/// [`how_sum`] with a caller-owned memo table. The table must only be reused
/// with the same `numbers`.
///
/// Each entry maps a remainder to the first number that leads to a solvable
/// smaller remainder (`None` when the remainder is unreachable), so the table
/// grows linearly with `target`.
pub fn how_sum_with(
    memo: &mut Memo<u64, Option<u64>>,
    target: u64,
    numbers: &[u64],
) -> Option<Vec<u64>> {
    let mut pending = vec![target];
    while let Some(&current) = pending.last() {
        if current == 0 || memo.get(&current).is_some() {
            pending.pop();
            continue;
        }
        let known = |rest: u64| memo.get(&rest).map(|step| step.is_some());
        match next_remainder(current, numbers, known) {
            Resolution::Found(n) => {
                memo.store(current, Some(n));
                pending.pop();
            }
            Resolution::Missing => {
                memo.store(current, None);
                pending.pop();
            }
            Resolution::Unknown(rest) => pending.push(rest),
        }
    }

    let mut combination = Vec::new();
    let mut remaining = target;
    while remaining > 0 {
        let step = memo.get(&remaining).flatten()?;
        combination.push(step);
        remaining -= step;
    }
    combination.reverse();
    Some(combination)
}

/// Outcome of scanning `numbers` for one remainder.
enum Resolution {
    /// Subtracting this number leaves a solvable remainder.
    Found(u64),
    /// No number leads anywhere.
    Missing,
    /// This smaller remainder must be resolved first.
    Unknown(u64),
}

/// Scan `numbers` in order, as a short-circuiting recursive search would.
/// `known` reports whether a smaller, non-zero remainder is solvable, if settled.
fn next_remainder(
    current: u64,
    numbers: &[u64],
    known: impl Fn(u64) -> Option<bool>,
) -> Resolution {
    for &n in numbers.iter().filter(|&&n| n != 0 && n <= current) {
        let rest = current - n;
        if rest == 0 {
            return Resolution::Found(n);
        }
        match known(rest) {
            Some(true) => return Resolution::Found(n),
            Some(false) => {}
            None => return Resolution::Unknown(rest),
        }
    }
    Resolution::Missing
}
