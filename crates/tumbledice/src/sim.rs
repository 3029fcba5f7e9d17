// ABOUTME: Monte Carlo simulation over a roll configuration.
// ABOUTME: Runs many trials to compute a score distribution and statistics.

use crate::config::RollConfig;
use crate::error::{Error, Result};
use crate::rng::{FastRng, Rng};
use std::collections::HashMap;

/// Result of a Monte Carlo simulation.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// Distribution of scores: value -> count.
    pub distribution: HashMap<i64, usize>,
    /// Minimum score observed.
    pub min: i64,
    /// Maximum score observed.
    pub max: i64,
    /// Mean (average) score.
    pub mean: f64,
    /// Standard deviation.
    pub std_dev: f64,
    /// Number of trials run.
    pub n: usize,
}

impl SimResult {
    /// Returns outcomes sorted by value for iteration.
    pub fn sorted_outcomes(&self) -> Vec<(i64, usize)> {
        let mut outcomes: Vec<_> = self.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by_key(|(k, _)| *k);
        outcomes
    }

    /// Returns the probability of each outcome.
    pub fn probabilities(&self) -> HashMap<i64, f64> {
        self.distribution
            .iter()
            .map(|(&k, &v)| (k, v as f64 / self.n as f64))
            .collect()
    }

    /// Returns the mode (most common outcome).
    pub fn mode(&self) -> Option<i64> {
        self.distribution
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&value, _)| value)
    }

    /// Returns the median score.
    pub fn median(&self) -> f64 {
        let mut values: Vec<i64> = Vec::with_capacity(self.n);
        for (&value, &count) in &self.distribution {
            for _ in 0..count {
                values.push(value);
            }
        }
        values.sort();

        if values.is_empty() {
            return 0.0;
        }

        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) as f64 / 2.0
        } else {
            values[mid] as f64
        }
    }
}

/// Run a Monte Carlo simulation of a roll configuration.
///
/// Each trial rolls the configuration and records its score (success count
/// when a success rule is set, kept total otherwise).
pub fn simulate(config: &RollConfig, n: usize) -> Result<SimResult> {
    run(config, n, &mut FastRng::new())
}

/// Run a simulation with a seeded RNG for reproducibility.
pub fn simulate_seeded(config: &RollConfig, n: usize, seed: u64) -> Result<SimResult> {
    run(config, n, &mut FastRng::with_seed(seed))
}

fn run(config: &RollConfig, n: usize, rng: &mut impl Rng) -> Result<SimResult> {
    config.validate()?;
    if n == 0 {
        return Err(Error::InvalidTrialCount(n));
    }

    let mut distribution: HashMap<i64, usize> = HashMap::new();
    // Accumulate in f64: a score can reach MAX_DICE * MAX_SIDES, whose
    // square overflows i64 within a handful of trials.
    let mut sum: f64 = 0.0;
    let mut sum_sq: f64 = 0.0;
    let mut min = i64::MAX;
    let mut max = i64::MIN;

    for _ in 0..n {
        let score = config.roll_with_rng(rng)?.score();

        *distribution.entry(score).or_insert(0) += 1;
        sum += score as f64;
        sum_sq += (score as f64) * (score as f64);
        min = min.min(score);
        max = max.max(score);
    }

    let mean = sum / n as f64;
    // Rounding can push the difference a hair below zero for a constant
    // distribution; clamp before taking the root.
    let variance = ((sum_sq / n as f64) - (mean * mean)).max(0.0);
    let std_dev = variance.sqrt();

    Ok(SimResult {
        distribution,
        min,
        max,
        mean,
        std_dev,
        n,
    })
}
