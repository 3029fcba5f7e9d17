// ABOUTME: Success counting: classify rolls against a threshold and comparator.
// ABOUTME: Partitions a pool into successes and failures, preserving roll order.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A comparison operator for success tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    GreaterOrEqual,
    GreaterThan,
    LessOrEqual,
    LessThan,
    Equal,
}

impl Compare {
    /// Check if the given roll satisfies this comparison against the target.
    pub fn check(&self, roll: i64, target: i64) -> bool {
        match self {
            Compare::GreaterOrEqual => roll >= target,
            Compare::GreaterThan => roll > target,
            Compare::LessOrEqual => roll <= target,
            Compare::LessThan => roll < target,
            Compare::Equal => roll == target,
        }
    }
}

impl FromStr for Compare {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            ">=" => Ok(Compare::GreaterOrEqual),
            ">" => Ok(Compare::GreaterThan),
            "<=" => Ok(Compare::LessOrEqual),
            "<" => Ok(Compare::LessThan),
            "==" | "=" => Ok(Compare::Equal),
            _ => Err(Error::InvalidComparison(s.to_string())),
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compare::GreaterOrEqual => write!(f, ">="),
            Compare::GreaterThan => write!(f, ">"),
            Compare::LessOrEqual => write!(f, "<="),
            Compare::LessThan => write!(f, "<"),
            Compare::Equal => write!(f, "=="),
        }
    }
}

/// Result of classifying a pool of rolls against a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessTally {
    pub success_count: usize,
    /// Rolls that passed, in original order.
    pub successes: Vec<i64>,
    /// Rolls that failed, in original order.
    pub failures: Vec<i64>,
}

/// Classify each roll against `threshold` using `compare`.
pub fn count_successes(rolls: &[i64], threshold: i64, compare: Compare) -> SuccessTally {
    let (successes, failures): (Vec<i64>, Vec<i64>) = rolls
        .iter()
        .copied()
        .partition(|&roll| compare.check(roll, threshold));

    SuccessTally {
        success_count: successes.len(),
        successes,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_at_least() {
        let tally = count_successes(&[6, 4, 2, 5, 1, 6], 5, Compare::GreaterOrEqual);
        assert_eq!(tally.success_count, 3);
        assert_eq!(tally.successes, vec![6, 5, 6]);
        assert_eq!(tally.failures, vec![4, 2, 1]);
    }

    #[test]
    fn counts_strictly_greater() {
        let tally = count_successes(&[6, 5, 5, 4], 5, Compare::GreaterThan);
        assert_eq!(tally.success_count, 1);
        assert_eq!(tally.successes, vec![6]);
    }

    #[test]
    fn counts_exact_matches() {
        let tally = count_successes(&[6, 6, 5, 6, 4], 6, Compare::Equal);
        assert_eq!(tally.success_count, 3);
        assert_eq!(tally.successes, vec![6, 6, 6]);
    }

    #[test]
    fn counts_at_most() {
        let tally = count_successes(&[1, 3, 5, 2], 2, Compare::LessOrEqual);
        assert_eq!(tally.success_count, 2);
        assert_eq!(tally.successes, vec![1, 2]);
        assert_eq!(tally.failures, vec![3, 5]);
    }

    #[test]
    fn empty_pool_tallies_to_zero() {
        let tally = count_successes(&[], 4, Compare::GreaterOrEqual);
        assert_eq!(tally.success_count, 0);
        assert!(tally.successes.is_empty());
        assert!(tally.failures.is_empty());
    }

    #[test]
    fn partition_covers_every_roll() {
        let rolls = [3, 9, 2, 7, 7, 1];
        let tally = count_successes(&rolls, 7, Compare::GreaterOrEqual);
        assert_eq!(tally.successes.len() + tally.failures.len(), rolls.len());
        assert_eq!(tally.success_count, tally.successes.len());
    }

    #[test]
    fn compare_tokens_parse() {
        assert_eq!(">=".parse::<Compare>().unwrap(), Compare::GreaterOrEqual);
        assert_eq!(">".parse::<Compare>().unwrap(), Compare::GreaterThan);
        assert_eq!("<=".parse::<Compare>().unwrap(), Compare::LessOrEqual);
        assert_eq!("<".parse::<Compare>().unwrap(), Compare::LessThan);
        assert_eq!("==".parse::<Compare>().unwrap(), Compare::Equal);
        assert_eq!("=".parse::<Compare>().unwrap(), Compare::Equal);
        assert!(matches!(
            "!=".parse::<Compare>(),
            Err(Error::InvalidComparison(_))
        ));
    }
}
