//! Phase 3 tests: memoized DP routines.

use graph_transport::dp::{
    can_sum, can_sum_with, fib, fib_with, grid_traveler, grid_traveler_with, how_sum,
    how_sum_with, Memo,
};

#[test]
fn test_fib_known_values() {
    let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    for (n, value) in expected.iter().enumerate() {
        assert_eq!(fib(n as u32), Some(*value));
    }
    assert_eq!(fib(50), Some(12_586_269_025));
    assert_eq!(fib(100), Some(354_224_848_179_261_915_075));
}

#[test]
fn test_fib_overflow_is_reported() {
    assert!(fib(186).is_some());
    assert!(fib(187).is_none());
    assert!(fib(1_000).is_none());
}

#[test]
fn test_memo_tables_are_independent() {
    let mut first = Memo::new();
    let mut second = Memo::new();
    assert_eq!(fib_with(&mut first, 30), Some(832_040));
    assert!(second.is_empty());
    assert_eq!(fib_with(&mut second, 5), Some(5));
    assert!(second.len() < first.len());

    first.clear();
    assert!(first.is_empty());
    assert_eq!(fib_with(&mut first, 12), Some(144));
}

#[test]
fn test_grid_traveler_values() {
    assert_eq!(grid_traveler(1, 1), Some(1));
    assert_eq!(grid_traveler(2, 3), Some(3));
    assert_eq!(grid_traveler(3, 2), Some(3));
    assert_eq!(grid_traveler(3, 3), Some(6));
    assert_eq!(grid_traveler(0, 0), Some(0));
    assert_eq!(grid_traveler(7, 0), Some(0));
    assert_eq!(grid_traveler(18, 18), Some(2_333_606_220));
}

#[test]
fn test_grid_traveler_shared_memo() {
    let mut memo = Memo::new();
    assert_eq!(grid_traveler_with(&mut memo, 10, 10), Some(48_620));
    let filled = memo.len();
    assert_eq!(grid_traveler_with(&mut memo, 9, 10), Some(24_310));
    assert_eq!(memo.len(), filled);
}

#[test]
fn test_can_sum_cases() {
    assert!(can_sum(6, &[5, 3, 4, 7]));
    assert!(!can_sum(7, &[2, 4]));
    assert!(can_sum(7, &[2, 3]));
    assert!(can_sum(8, &[2, 3, 5]));
    assert!(!can_sum(300, &[7, 14]));
    assert!(can_sum(0, &[]));
    assert!(!can_sum(1, &[]));
}

#[test]
fn test_can_sum_memo_reuse_same_numbers() {
    let numbers = [7, 14];
    let mut memo = Memo::new();
    assert!(!can_sum_with(&mut memo, 300, &numbers));
    assert!(can_sum_with(&mut memo, 294, &numbers));
    assert!(!can_sum_with(&mut memo, 13, &numbers));
}

#[test]
fn test_how_sum_cases() {
    let combo = how_sum(8, &[2, 3, 5]).unwrap();
    assert_eq!(combo.iter().sum::<u64>(), 8);
    assert!(combo.iter().all(|n| [2, 3, 5].contains(n)));

    assert_eq!(how_sum(0, &[3]), Some(vec![]));
    assert_eq!(how_sum(7, &[2, 4]), None);
    assert_eq!(how_sum(300, &[7, 14]), None);
    assert_eq!(how_sum(7, &[7]), Some(vec![7]));
    assert_eq!(how_sum(9, &[0, 3]), Some(vec![3, 3, 3]));
}

#[test]
fn test_how_sum_memo_reuse() {
    let numbers = [5, 3];
    let mut memo = Memo::new();
    let combo = how_sum_with(&mut memo, 11, &numbers).unwrap();
    assert_eq!(combo.iter().sum::<u64>(), 11);
    assert!(!memo.is_empty());
    assert_eq!(how_sum_with(&mut memo, 1, &numbers), None);
}

#[test]
fn test_large_targets_run_without_deep_recursion() {
    assert!(can_sum(1_000_000, &[1]));
    assert!(can_sum(1_000_000, &[7, 3]));
    assert!(!can_sum(1_000_001, &[2, 4]));

    let combo = how_sum(200_000, &[1]).unwrap();
    assert_eq!(combo.len(), 200_000);
    let combo = how_sum(999_999, &[10, 3]).unwrap();
    assert_eq!(combo.iter().sum::<u64>(), 999_999);
    assert_eq!(how_sum(500_001, &[2]), None);
}

#[test]
fn test_long_thin_grids() {
    assert_eq!(grid_traveler(1, 500_000), Some(1));
    assert_eq!(grid_traveler(1_000_000, 1), Some(1));
    assert_eq!(grid_traveler(2, 1_000_000), Some(1_000_000));
    assert_eq!(grid_traveler(3, 100_000), Some(5_000_050_000));
    assert_eq!(grid_traveler(30, u32::MAX), None);
}

#[test]
fn test_grid_traveler_memo_keys_short_side_first() {
    let mut memo = Memo::new();
    assert_eq!(grid_traveler_with(&mut memo, 5, 3), Some(15));
    assert_eq!(memo.len(), 2);
    assert_eq!(grid_traveler_with(&mut memo, 2, 5), Some(5));
    assert_eq!(memo.len(), 2);
}
