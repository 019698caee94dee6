use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;
const WINDOW_SLACK: i64 = 8;

/// Criterion settings for inputs up to `max_len` elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeProfile {
    pub max_len: usize,
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
}

/// Sorted by `max_len`; the last entry covers everything larger.
pub const RUNTIME_PROFILES: [RuntimeProfile; 3] = [
    RuntimeProfile {
        max_len: 4_096,
        sample_size: 15,
        warm_up_ms: 100,
        measure_ms: 200,
    },
    RuntimeProfile {
        max_len: 65_536,
        sample_size: 15,
        warm_up_ms: 300,
        measure_ms: 600,
    },
    RuntimeProfile {
        max_len: usize::MAX,
        sample_size: 10,
        warm_up_ms: 500,
        measure_ms: 1000,
    },
];

pub fn runtime_profile_for_len(len: usize) -> RuntimeProfile {
    RUNTIME_PROFILES
        .iter()
        .copied()
        .find(|profile| len <= profile.max_len)
        .unwrap_or(RUNTIME_PROFILES[RUNTIME_PROFILES.len() - 1])
}

pub fn apply_runtime_config_for_len<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    len: usize,
) {
    let profile = runtime_profile_for_len(len);
    group.sample_size(profile.sample_size);
    group.warm_up_time(Duration::from_millis(profile.warm_up_ms));
    group.measurement_time(Duration::from_millis(profile.measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    debug_assert!(range.start() <= range.end());
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.random_range(range.clone()));
    }
    values
}

/// `(start, n)` pairs for windowed reads, including out-of-range ones.
///
/// Both components fall in `[-8, len + 8]`.
pub fn random_windows<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<(isize, isize)> {
    // `isize` has no uniform sampler, so draw as `i64`.
    let bound = len as i64 + WINDOW_SLACK;
    let mut windows = Vec::with_capacity(count);
    for _ in 0..count {
        let start = rng.random_range(-WINDOW_SLACK..=bound);
        let n = rng.random_range(-WINDOW_SLACK..=bound);
        windows.push((start as isize, n as isize));
    }
    windows
}
