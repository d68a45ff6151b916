//! Lazily seeded pseudo-random numbers for OKM programs.
//!
//! The generator starts unseeded and seeds itself from its `SeedSource` on
//! the first draw. That transition happens once per generator; the
//! process-wide instance sits behind a mutex so concurrent first use
//! cannot seed twice.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use libc::c_int;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value `math_random` returns (glibc's `RAND_MAX`).
pub const RANDOM_MAX: c_int = c_int::MAX;

/// Where a generator takes its seed from.
pub trait SeedSource {
    fn seed(&mut self) -> u64;
}

/// Seeds from wall-clock time at second resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl SeedSource for WallClock {
    fn seed(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Always seeds with the same value, for reproducible hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn seed(&mut self) -> u64 {
        self.0
    }
}

/// A generator that seeds itself on first use and never again.
#[derive(Debug)]
pub struct LazyRandom<S: SeedSource> {
    source: S,
    rng: Option<StdRng>,
    seed_events: u32,
}

impl<S: SeedSource> LazyRandom<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            rng: None,
            seed_events: 0,
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.rng.is_some()
    }

    /// Number of times the generator has been seeded (0 or 1).
    pub fn seed_events(&self) -> u32 {
        self.seed_events
    }

    /// Draw the next value in `[0, RANDOM_MAX]`.
    pub fn draw(&mut self) -> c_int {
        let source = &mut self.source;
        let seed_events = &mut self.seed_events;
        let rng = self.rng.get_or_insert_with(|| {
            *seed_events += 1;
            StdRng::seed_from_u64(source.seed())
        });
        rng.gen_range(0..=RANDOM_MAX)
    }
}

static GLOBAL_RANDOM: Mutex<LazyRandom<WallClock>> = Mutex::new(LazyRandom::new(WallClock));

/// Next pseudo-random integer from the process-wide generator.
///
/// Seeded from the current time on the first call.
#[no_mangle]
pub extern "C" fn math_random() -> c_int {
    GLOBAL_RANDOM
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .draw()
}
