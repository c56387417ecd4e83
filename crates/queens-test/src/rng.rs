//! Seeded random sources.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a ChaCha8 generator whose stream only depends on `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = seeded_rng(9);
        let mut b = seeded_rng(9);
        for _ in 0..16 {
            assert_eq!(a.random_range(0..100u32), b.random_range(0..100u32));
        }
    }
}
