//! Quiz draws: pick one unseen question uniformly at random.
//!
//! The random source is a capability passed in by the caller so draws can
//! be made reproducible under test with [`SeededRandom`].

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Random sources
// ---------------------------------------------------------------------------

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` of 0 or 1 always yields 0.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator: the same seed yields the same sequence of picks.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..len)
    }
}

// ---------------------------------------------------------------------------
// Draw
// ---------------------------------------------------------------------------

/// Pick one candidate whose id is not in `previous`.
///
/// Candidates are filtered as a set difference first, then one survivor is
/// chosen with `rng`. Returns `None` when every candidate has been seen.
pub fn draw_unseen<T, F>(
    candidates: Vec<T>,
    previous: &HashSet<DbId>,
    id_of: F,
    rng: &dyn RandomSource,
) -> Option<T>
where
    F: Fn(&T) -> DbId,
{
    let mut remaining: Vec<T> = candidates
        .into_iter()
        .filter(|c| !previous.contains(&id_of(c)))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.pick(remaining.len()).min(remaining.len() - 1);
    Some(remaining.swap_remove(index))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
