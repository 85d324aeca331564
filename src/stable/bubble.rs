//! Bubble sort with a shrinking comparison range and an early exit once a pass makes no swaps.
//!
//! Every pass moves the largest element of the unsorted prefix to the end of that prefix, so the
//! prefix shrinks by one per pass. Equal neighbours are never swapped, which keeps the sort stable.

use std::cmp::Ordering;

sort_impl!("bubble_stable");

/// Counters collected while sorting, one pass is one left to right sweep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sorts `v` in non-decreasing order and hands the same slice back for chaining.
#[inline]
pub fn sort_ascending<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    sort(v);
    v
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a: &T, b: &T| a.gt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Greater);
}

/// Like [`sort_by`], but reports how much work the sort did.
pub fn sort_by_with_stats<T, F>(v: &mut [T], mut compare: F) -> PassStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Greater)
}

fn bubble_sort<T, F>(v: &mut [T], is_greater: &mut F) -> PassStats
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stats = PassStats::default();
    let mut effective_len = v.len();

    loop {
        let mut swapped = false;

        for i in 0..effective_len.saturating_sub(1) {
            stats.comparisons += 1;
            if is_greater(&v[i], &v[i + 1]) {
                v.swap(i, i + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        stats.passes += 1;
        effective_len = effective_len.saturating_sub(1);

        if !swapped || effective_len < 2 {
            break;
        }
    }

    stats
}
