//! Deterministic input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scalar::Scalar;

/// Reproducible random vector of length `n`, uniform over [-1, 1].
///
/// The stream is ChaCha8 seeded from `seed`, so the same seed and length
/// give a bit-for-bit identical vector on every platform. Draws happen in
/// `f64` and are converted to the target precision afterwards, which
/// means the f32 and f64 vectors for one seed come from the same
/// underlying draw sequence.
///
/// `n = 0` returns an empty vector.
pub fn make_random<T: Scalar>(n: usize, seed: u32) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));

    (0..n).map(|_| T::from_f64(rng.gen_range(-1.0..=1.0))).collect()
}
