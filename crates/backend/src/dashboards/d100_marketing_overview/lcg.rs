//! Deterministic pseudo-random stream for the synthetic data generator.
//!
//! Multiplicative linear congruential generator over the Mersenne prime
//! 2^31 - 1 with multiplier 48271 (the MINSTD parameters). The same seed
//! always yields the same sequence on every platform, which is what makes
//! the demo dashboard stable run-to-run.

const MODULUS: u64 = 2_147_483_647; // 2^31 - 1
const MULTIPLIER: u64 = 48_271;

/// Stateful stream of pseudo-random values in [0, 1).
///
/// Owned by exactly one synthesizer call; never shared across channels.
/// A seed of 0 (or any multiple of the modulus) produces the constant
/// zero stream, so callers must pass non-zero seeds.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u64,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        // The seed must be reduced before the first draw
        Self {
            state: seed % MODULUS,
        }
    }

    /// Next value in [0, 1), advancing the internal state
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        // state < 2^31 and multiplier < 2^17, product fits in u64
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededStream::new(42);
        let mut b = SeededStream::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_outputs_in_unit_interval() {
        for seed in [1u64, 7, 42, 1337, 2_147_483_646] {
            let mut stream = SeededStream::new(seed);
            for _ in 0..1000 {
                let value = stream.next();
                assert!((0.0..1.0).contains(&value), "seed {seed} produced {value}");
            }
        }
    }

    #[test]
    fn test_first_draw_snapshot_seed_42() {
        // 42 * 48271 = 2_027_382; pinned to catch accidental algorithm drift
        let mut stream = SeededStream::new(42);
        assert_eq!(stream.next(), 2_027_382.0 / 2_147_483_647.0);
    }

    #[test]
    fn test_seed_reduced_modulo_prime() {
        let mut wrapped = SeededStream::new(2_147_483_647 + 42);
        let mut plain = SeededStream::new(42);
        for _ in 0..10 {
            assert_eq!(wrapped.next(), plain.next());
        }
    }

    #[test]
    fn test_zero_seed_is_degenerate() {
        let mut stream = SeededStream::new(0);
        for _ in 0..10 {
            assert_eq!(stream.next(), 0.0);
        }
    }

    #[test]
    fn test_distinct_seeds_diverge() {
        let mut a = SeededStream::new(7);
        let mut b = SeededStream::new(1337);
        assert_ne!(a.next(), b.next());
    }
}
