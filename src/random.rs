//! Randomization primitives over grapheme sequences.
//!
//! Every function takes the random source explicitly, so a seeded generator
//! gives reproducible names and tests can pin the output.

use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

use crate::text::GraphemeSequence;

/// Uniform sample from the inclusive range `[min, max]`.
///
/// Reversed bounds are swapped rather than treated as a panic.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max {
        (min, max)
    } else {
        tracing::warn!(min, max, "uniform_int called with reversed bounds");
        (max, min)
    };
    rng.random_range(lo..=hi)
}

/// Uniformly random permutation (Fisher-Yates). The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, seq: &GraphemeSequence) -> GraphemeSequence {
    let mut units = seq.units().to_vec();
    units.shuffle(rng);
    GraphemeSequence::from(units)
}

/// Random permutation by sorting on random keys.
///
/// Each unit is tagged with a random key and the sequence is stably sorted by
/// it. Ties keep their original relative order.
pub fn random_sort<R: Rng + ?Sized>(rng: &mut R, seq: &GraphemeSequence) -> GraphemeSequence {
    let mut keyed: Vec<(u32, &String)> = seq.iter().map(|u| (rng.random::<u32>(), u)).collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, u)| u.clone()).collect()
}

/// Draw `count` units from `alphabet` with replacement.
///
/// An empty alphabet yields an empty sequence.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, alphabet: &[&str], count: usize) -> GraphemeSequence {
    if alphabet.is_empty() {
        return GraphemeSequence::new();
    }
    (0..count)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
