//! Top-down merge sort.
//!
//! The merge step works in place by rotation, so it needs neither `T: Clone` nor a scratch
//! buffer. Each merge binary searches a split point that cuts both runs, rotates the middle parts
//! past each other and recurses on the two halves. That costs `O(N log N)` comparisons and
//! `O(N log² N)` element moves overall. Ties are taken from the left run first, which keeps the
//! sort stable.

use std::cmp::Ordering;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], is_less);
    merge_sort(&mut v[mid..], is_less);

    // Already in order, common for presorted input.
    if is_less(&v[mid], &v[mid - 1]) {
        merge(v, mid, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`, both non-empty.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if mid == 1 {
        // v[0] goes behind every right element that is strictly less.
        let pos = 1 + v[1..].partition_point(|x| is_less(x, &v[0]));
        v[..pos].rotate_left(1);
        return;
    }

    if len - mid == 1 {
        // v[mid] goes in front of every left element that is strictly greater.
        let pos = v[..mid].partition_point(|x| !is_less(&v[mid], x));
        v[pos..].rotate_right(1);
        return;
    }

    // Split both runs so that v[start..mid] and v[mid..end] swap places around the center.
    let center = len / 2;
    let pivot = center + mid;
    let (mut start, mut end) = if mid > center {
        (pivot - len, center)
    } else {
        (0, mid)
    };

    while start < end {
        let probe = (start + end) / 2;
        if is_less(&v[pivot - probe - 1], &v[probe]) {
            end = probe;
        } else {
            start = probe + 1;
        }
    }
    let split_end = pivot - start;

    if start < mid && mid < split_end {
        v[start..split_end].rotate_left(mid - start);
    }
    if 0 < start && start < center {
        merge(&mut v[..center], start, is_less);
    }
    if center < split_end && split_end < len {
        merge(&mut v[center..], split_end - center, is_less);
    }
}
