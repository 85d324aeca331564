//! Input generators for the sort tests and benchmarks.
//!
//! Every generator draws from an rng seeded with [`random_init_seed`], so within one process the
//! same call yields the same values. Set `OVERRIDE_SEED` to replay a failing run.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

/// Uniformly distributed values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = pattern_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed values drawn from `range`, eg. `0..=1` for binary input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();
    dist.sample_iter(pattern_rng()).take(len).collect()
}

/// Random values whose leading `sorted_percent` share is already in ascending order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut vals = random(len);
    let prefix = share_of(len, sorted_percent).min(len);
    vals[..prefix].sort_unstable();
    vals
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    let mut vals = ascending(len);
    vals.reverse();
    vals
}

/// Ascending values where `swap_percent` of `len` random index pairs were swapped, at least one.
pub fn partially_shuffled(len: usize, swap_percent: f64) -> Vec<i32> {
    partially_shuffled_with(&mut pattern_rng(), len, swap_percent)
}

/// Same as [`partially_shuffled`] but draws from a caller provided rng, so callers can run their
/// own seeded sequence.
pub fn partially_shuffled_with<R: Rng>(rng: &mut R, len: usize, swap_percent: f64) -> Vec<i32> {
    let mut vals = ascending(len);
    if len == 0 {
        return vals;
    }

    for _ in 0..share_of(len, swap_percent).max(1) {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        vals.swap(a, b);
    }

    vals
}

/// Random values cut into `saw_count` runs, each run sorted either up or down.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let run_len = (len / saw_count.max(1)).max(1);
    let mut rng = pattern_rng();
    for run in vals.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    vals
}

/// Rises to a peak in the middle and falls again.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);
    let (rising, falling) = vals.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));
    vals
}

/// Makes every following pattern call draw from a fresh seed, which is what benchmarks want.
///
/// # Panics
///
/// If `OVERRIDE_SEED` is set, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    assert!(
        env::var_os("OVERRIDE_SEED").is_none(),
        "OVERRIDE_SEED pins the seed, it can't be combined with a fresh seed per call"
    );

    FRESH_SEED_PER_CALL.store(true, Ordering::Release);
}

/// The seed the patterns use, `OVERRIDE_SEED` if set and parsable, otherwise random once per
/// process.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_PER_CALL.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static PROCESS_SEED: OnceCell<u64> = OnceCell::new();
    *PROCESS_SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn pattern_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn share_of(len: usize, percent: f64) -> usize {
    ((len as f64) * (percent / 100.0)) as usize
}
