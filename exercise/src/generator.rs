use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Largest supported digit count; 10^9 - 1 still fits in a u32 target.
pub const MAX_DIGITS: u32 = 9;

/// One generated puzzle: a target number and the token pool the player
/// may split across the two bins to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub target_number: u32,
    pub operation: Operation,
    pub digit_count: u32,
    pub total_tokens: u32,
}

impl Exercise {
    /// Upper bound on bin_a + bin_b for this exercise.
    pub fn token_budget(&self) -> u32 {
        self.total_tokens
    }
}

/// Seedable exercise source. Seeded construction makes every draw
/// reproducible in tests.
#[derive(Debug)]
pub struct ExerciseGenerator {
    rng: StdRng,
}

impl ExerciseGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw a new exercise. A digit count of 0 is treated as 1 and
    /// anything past MAX_DIGITS is capped there.
    pub fn generate(&mut self, digit_count: u32, operation: Operation) -> Exercise {
        let digit_count = digit_count.clamp(1, MAX_DIGITS);

        let target_number = if digit_count == 1 {
            self.rng.gen_range(1..=9)
        } else {
            let min = 10u32.pow(digit_count - 1);
            let max = 10u32.pow(digit_count) - 1;
            self.rng.gen_range(min..=max)
        };

        let spare = self.rng.gen_range(1..=3);
        let total_tokens = match operation {
            // Sum: a few extra tokens beyond the target.
            Operation::Sum => target_number + spare,
            // Difference: 5 extra guarantees every |A - B| = target
            // split is expressible from the pool.
            Operation::Difference => target_number + 5 + spare,
        };

        Exercise {
            target_number,
            operation,
            digit_count,
            total_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_range() {
        let mut gen = ExerciseGenerator::new(1);
        for _ in 0..200 {
            let ex = gen.generate(1, Operation::Sum);
            assert!((1..=9).contains(&ex.target_number));
            assert_eq!(ex.digit_count, 1);
        }
    }

    #[test]
    fn test_three_digit_range() {
        let mut gen = ExerciseGenerator::new(2);
        for _ in 0..200 {
            let ex = gen.generate(3, Operation::Sum);
            assert!((100..=999).contains(&ex.target_number));
        }
    }

    #[test]
    fn test_sum_pool_bounds() {
        let mut gen = ExerciseGenerator::new(3);
        for _ in 0..200 {
            let ex = gen.generate(2, Operation::Sum);
            let spare = ex.total_tokens - ex.target_number;
            assert!((1..=3).contains(&spare));
        }
    }

    #[test]
    fn test_difference_pool_bounds() {
        let mut gen = ExerciseGenerator::new(4);
        for _ in 0..200 {
            let ex = gen.generate(2, Operation::Difference);
            let spare = ex.total_tokens - ex.target_number;
            assert!((6..=8).contains(&spare));
        }
    }

    #[test]
    fn test_zero_digit_count_treated_as_one() {
        let mut gen = ExerciseGenerator::new(5);
        let ex = gen.generate(0, Operation::Sum);
        assert_eq!(ex.digit_count, 1);
        assert!((1..=9).contains(&ex.target_number));
    }

    #[test]
    fn test_seeded_generation_replays() {
        let mut a = ExerciseGenerator::new(42);
        let mut b = ExerciseGenerator::new(42);
        for _ in 0..50 {
            assert_eq!(
                a.generate(2, Operation::Difference),
                b.generate(2, Operation::Difference)
            );
        }
    }

    #[test]
    fn test_exercise_serialization() {
        let mut gen = ExerciseGenerator::new(6);
        let ex = gen.generate(2, Operation::Sum);
        let json = serde_json::to_string(&ex).unwrap();
        let parsed: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ex);
    }
}
