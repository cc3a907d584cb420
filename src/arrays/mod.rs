//! Integer sequence utilities

use rustc_hash::FxHashSet;

/// Union of two integer sequences in first-seen order.
///
/// Every element of `first` with repeats dropped (first occurrence kept),
/// followed by every element of `second` not already present in the
/// accumulated result.  Not a sorted merge.
pub fn dedup_merge(first: &[i32], second: &[i32]) -> Vec<i32> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for &v in first.iter().chain(second) {
        if seen.insert(v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_merge_first_seen_order() {
        assert_eq!(dedup_merge(&[1, 2, 2, 3], &[3, 4, 1]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_dedup_merge_keeps_unsorted_order() {
        assert_eq!(dedup_merge(&[5, 1], &[4, 5, 2]), vec![5, 1, 4, 2]);
    }

    #[test]
    fn test_dedup_merge_empty_inputs() {
        assert_eq!(dedup_merge(&[], &[]), Vec::<i32>::new());
        assert_eq!(dedup_merge(&[], &[7, 7]), vec![7]);
        assert_eq!(dedup_merge(&[7, 7], &[]), vec![7]);
    }
}
