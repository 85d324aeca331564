//! Iterative quicksort with a random pivot and Lomuto partitioning.
//!
//! Pending ranges live on an explicit stack instead of the call stack. The smaller side of each
//! partition is pushed last so it is handled first, which bounds the stack to `O(log n)` entries.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Seeded by the length so that the same input always sees the same pivots and the same
    // comparisons.
    let mut rng = StdRng::seed_from_u64(len as u64);

    // Inclusive `(lo, hi)` ranges.
    let mut stack = vec![(0, len - 1)];

    while let Some((lo, hi)) = stack.pop() {
        if lo >= hi {
            continue;
        }

        let pivot_pos = partition(&mut v[lo..=hi], rng.gen_range(0..=(hi - lo)), is_less) + lo;

        let left_len = pivot_pos - lo;
        let right_len = hi - pivot_pos;

        let left = (lo, pivot_pos.saturating_sub(1));
        let right = (pivot_pos + 1, hi);

        if left_len > right_len {
            if left_len > 1 {
                stack.push(left);
            }
            if right_len > 1 {
                stack.push(right);
            }
        } else {
            if right_len > 1 {
                stack.push(right);
            }
            if left_len > 1 {
                stack.push(left);
            }
        }
    }
}

/// Moves the pivot to the end, partitions everything not greater than it to the front and returns
/// the final pivot position.
fn partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    v.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        // `v[i] <= pivot`
        if !is_less(&v[last], &v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}
