//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::dominoes::Domino;

    /// Generate a zig-zag matrix dimension small enough to check exhaustively
    pub fn dimension() -> impl Strategy<Value = usize> {
        1usize..=40
    }

    /// Generate a strictly ascending list of small integers with gaps
    pub fn ascending_numbers() -> impl Strategy<Value = Vec<i64>> {
        (-50i64..50, prop::collection::vec(1i64..4, 0..30)).prop_map(|(start, steps)| {
            let mut current = start;
            let mut nums = vec![start];
            for step in steps {
                current += step;
                nums.push(current);
            }
            nums
        })
    }

    /// Generate a single domino from a double-six set
    pub fn domino() -> impl Strategy<Value = Domino> {
        (0u8..=6, 0u8..=6).prop_map(|(a, b)| Domino(a, b))
    }

    /// Generate a small set of dominoes
    pub fn domino_set() -> impl Strategy<Value = Vec<Domino>> {
        prop::collection::vec(domino(), 0..10)
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_dimension_generator(n in dimension()) {
            prop_assert!(n >= 1);
        }

        #[test]
        fn test_ascending_numbers_generator(nums in ascending_numbers()) {
            prop_assert!(!nums.is_empty());
            prop_assert!(nums.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn test_domino_generator(tile in domino()) {
            prop_assert!(tile.0 <= 6 && tile.1 <= 6);
        }
    }
}
