use rand::{rngs::OsRng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Per-instance pseudo random source.
///
/// Uses the xoshiro256** PRNG. Each owner gets its own generator, so two
/// containers never share structural randomness unless they are given the
/// same seed on purpose.
///
/// # Examples
///
/// ```
/// use grove_util::random::LevelRng;
///
/// let mut a = LevelRng::new(Some([7u8; 32]));
/// let mut b = LevelRng::new(Some([7u8; 32]));
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Clone, Debug)]
pub struct LevelRng {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl LevelRng {
    /// Create a new generator with an optional seed.
    ///
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a generator from a 64-bit seed.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Uniform 32-bit sample.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Number of consecutive samples that fall under `threshold`, plus one,
    /// capped at `max`. With `threshold = p * 2^32` this is a geometric
    /// distribution with success probability `p`.
    pub fn geometric(&mut self, threshold: u32, max: usize) -> usize {
        let mut level = 1;
        while level < max && self.next_u32() < threshold {
            level += 1;
        }
        level
    }
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_with_seed() {
        let mut a = LevelRng::from_u64(42);
        let mut b = LevelRng::from_u64(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn geometric_respects_cap() {
        let mut rng = LevelRng::from_u64(1);
        for _ in 0..1000 {
            let level = rng.geometric(u32::MAX, 5);
            assert_eq!(level, 5);
        }
        for _ in 0..1000 {
            assert_eq!(rng.geometric(0, 32), 1);
        }
    }

    #[test]
    fn geometric_quarter_mean() {
        let mut rng = LevelRng::from_u64(7);
        let threshold = u32::MAX / 4;
        let n = 20_000;
        let total: usize = (0..n).map(|_| rng.geometric(threshold, 32)).sum();
        let mean = total as f64 / n as f64;
        // E[L] = 1 / (1 - p) = 4/3 for p = 0.25.
        assert!((1.25..1.42).contains(&mean), "mean level {mean}");
    }
}
