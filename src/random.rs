use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for generated game trees.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// A number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// `true` with a probability of `percent` in a hundred.
    fn chance(&mut self, percent: u8) -> bool {
        self.next_range(0, 100) < i32::from(percent)
    }
}

/// Backed by the thread-local generator of `rand`.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. The same seed yields the same trees on every
/// platform, which keeps tests reproducible.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER_A)
            .wrapping_add(INCREMENT_C)
            .rem_euclid(i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        let span = i64::from(to) - i64::from(from);
        (i64::from(self.next()) % span + i64::from(from)) as i32
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}
