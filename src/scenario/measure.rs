//! This module implements functionality for measuring the duration of some task.

use std::hint::black_box;
use std::time::Instant;

/// Measures the time it takes to execute the function `test_fn`, in seconds.
#[inline(never)]
pub fn measure_seconds(test_fn: impl FnOnce()) -> f64 {
    let start = Instant::now();

    black_box(test_fn());

    start.elapsed().as_secs_f64()
}

/// Median of the samples, the mean of the two middle values for an even count. `None` if there are
/// no samples.
pub fn median(samples: &mut [f64]) -> Option<f64> {
    let len = samples.len();
    if len == 0 {
        return None;
    }

    samples.sort_unstable_by(f64::total_cmp);

    let mid = len / 2;
    if len % 2 == 0 {
        Some((samples[mid - 1] + samples[mid]) / 2.0)
    } else {
        Some(samples[mid])
    }
}
