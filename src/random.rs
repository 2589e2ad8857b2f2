//! Random source construction.
//!
//! Every run owns exactly one generator, created here and passed explicitly
//! to each operator. There is no global random state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// Two generators created from the same seed produce identical streams.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local entropy source.
pub fn fresh_seed() -> u64 {
    rand::random()
}
