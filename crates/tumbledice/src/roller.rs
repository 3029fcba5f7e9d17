// ABOUTME: Dice rolling mechanics: single dice, exploding dice, and dice pools.
// ABOUTME: Every roll is a pure function of its inputs plus the injected RNG.

use crate::error::{Error, Result};
use crate::rng::Rng;
use std::fmt;
use std::str::FromStr;

/// Maximum number of chained explosions per die to prevent runaway loops.
const MAX_EXPLOSIONS: u32 = 100;

/// How an exploding die behaves after rolling its maximum face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplodeMode {
    /// Explode at most once: one extra roll after a max, then stop.
    Once,
    /// Keep exploding as long as the maximum face keeps appearing.
    Unlimited,
}

impl FromStr for ExplodeMode {
    type Err = Error;

    /// Accepts the canonical tokens plus the legacy "standard"/"compound"
    /// vocabulary used by older configurations.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" | "standard" => Ok(ExplodeMode::Once),
            "unlimited" | "compound" => Ok(ExplodeMode::Unlimited),
            _ => Err(Error::InvalidExplodeMode(s.to_string())),
        }
    }
}

impl fmt::Display for ExplodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplodeMode::Once => write!(f, "once"),
            ExplodeMode::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Result of one logical exploding die: the chained rolls and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplodingRoll {
    /// Sum of all chained rolls for this die.
    pub value: i64,
    /// The individual face values that were summed, in roll order.
    pub breakdown: Vec<i64>,
}

impl ExplodingRoll {
    /// True if at least one explosion occurred.
    pub fn exploded(&self) -> bool {
        self.breakdown.len() > 1
    }

    /// Render the breakdown joined by '+', e.g. "6+6+2".
    pub fn display(&self) -> String {
        self.breakdown
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for ExplodingRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Result of rolling a pool of plain dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicePool {
    /// Individual die results, in roll order.
    pub rolls: Vec<i64>,
    /// Sum of all rolls.
    pub total: i64,
}

/// Result of rolling a pool of exploding dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplodingPool {
    /// One entry per logical die, in roll order.
    pub rolls: Vec<ExplodingRoll>,
    /// Sum of all die values.
    pub total: i64,
    /// Total number of explosions across the pool.
    pub explosions: u32,
}

impl ExplodingPool {
    /// Per-die values with explosion chains already summed.
    pub fn values(&self) -> Vec<i64> {
        self.rolls.iter().map(|r| r.value).collect()
    }
}

/// Roll a single die, returning a value uniform over [1, sides].
pub fn roll_single_die(sides: u32, rng: &mut impl Rng) -> Result<i64> {
    if sides < 1 {
        return Err(Error::InvalidDiceSides(sides));
    }
    Ok(rng.roll(sides) as i64)
}

/// Roll one exploding die, chaining re-rolls while the maximum face appears.
///
/// In [`ExplodeMode::Once`] a max face earns exactly one extra roll; in
/// [`ExplodeMode::Unlimited`] the chain continues until a non-max face
/// appears (bounded by an internal safety cap).
pub fn roll_exploding_die(sides: u32, mode: ExplodeMode, rng: &mut impl Rng) -> Result<ExplodingRoll> {
    // A 1-sided die always shows its max and would never stop exploding.
    if sides < 2 {
        return Err(Error::InvalidExplodingSides(sides));
    }

    let max = sides as i64;
    let mut roll = rng.roll(sides) as i64;
    let mut breakdown = vec![roll];
    let mut value = roll;
    let mut explosions = 0;

    while roll == max {
        if explosions >= MAX_EXPLOSIONS {
            return Err(Error::ExplodeLimit(MAX_EXPLOSIONS));
        }
        roll = rng.roll(sides) as i64;
        breakdown.push(roll);
        value += roll;
        explosions += 1;

        if mode == ExplodeMode::Once {
            break;
        }
    }

    Ok(ExplodingRoll { value, breakdown })
}

/// Roll a pool of plain dice.
pub fn roll_dice(num_dice: u32, dice_type: u32, rng: &mut impl Rng) -> Result<DicePool> {
    if num_dice < 1 {
        return Err(Error::InvalidDiceCount(num_dice));
    }
    if dice_type < 1 {
        return Err(Error::InvalidDiceSides(dice_type));
    }

    let mut rolls = Vec::with_capacity(num_dice as usize);
    for _ in 0..num_dice {
        rolls.push(roll_single_die(dice_type, rng)?);
    }
    let total = rolls.iter().sum();

    Ok(DicePool { rolls, total })
}

/// Roll a pool of exploding dice.
pub fn roll_exploding(
    num_dice: u32,
    dice_type: u32,
    mode: ExplodeMode,
    rng: &mut impl Rng,
) -> Result<ExplodingPool> {
    if num_dice < 1 {
        return Err(Error::InvalidDiceCount(num_dice));
    }
    if dice_type < 2 {
        return Err(Error::InvalidExplodingSides(dice_type));
    }

    let mut rolls = Vec::with_capacity(num_dice as usize);
    let mut explosions = 0;
    for _ in 0..num_dice {
        let roll = roll_exploding_die(dice_type, mode, rng)?;
        explosions += (roll.breakdown.len() - 1) as u32;
        rolls.push(roll);
    }
    let total = rolls.iter().map(|r| r.value).sum();

    Ok(ExplodingPool {
        rolls,
        total,
        explosions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FastRng, SeqRng};
    use proptest::prelude::*;

    #[test]
    fn single_die_in_range() {
        let mut rng = FastRng::with_seed(11);
        for _ in 0..200 {
            let v = roll_single_die(20, &mut rng).unwrap();
            assert!((1..=20).contains(&v));
        }
    }

    #[test]
    fn single_die_rejects_zero_sides() {
        let mut rng = SeqRng::new(vec![1]);
        assert_eq!(roll_single_die(0, &mut rng), Err(Error::InvalidDiceSides(0)));
    }

    #[test]
    fn pool_has_requested_size_and_total() {
        let mut rng = SeqRng::new(vec![3, 6, 1]);
        let pool = roll_dice(3, 6, &mut rng).unwrap();
        assert_eq!(pool.rolls, vec![3, 6, 1]);
        assert_eq!(pool.total, 10);
    }

    #[test]
    fn pool_rejects_zero_dice() {
        let mut rng = SeqRng::new(vec![1]);
        assert_eq!(roll_dice(0, 6, &mut rng), Err(Error::InvalidDiceCount(0)));
    }

    #[test]
    fn pool_rejects_zero_sides() {
        let mut rng = SeqRng::new(vec![1]);
        assert_eq!(roll_dice(3, 0, &mut rng), Err(Error::InvalidDiceSides(0)));
    }

    #[test]
    fn exploding_die_does_not_explode_below_max() {
        let mut rng = SeqRng::new(vec![4]);
        let roll = roll_exploding_die(6, ExplodeMode::Once, &mut rng).unwrap();
        assert_eq!(roll.breakdown, vec![4]);
        assert_eq!(roll.value, 4);
        assert!(!roll.exploded());
        assert_eq!(roll.display(), "4");
    }

    #[test]
    fn exploding_die_once_stops_after_one_extra_roll() {
        // Second 6 would explode again in unlimited mode; once mode stops.
        let mut rng = SeqRng::new(vec![6, 6]);
        let roll = roll_exploding_die(6, ExplodeMode::Once, &mut rng).unwrap();
        assert_eq!(roll.breakdown, vec![6, 6]);
        assert_eq!(roll.value, 12);
        assert_eq!(roll.display(), "6+6");
    }

    #[test]
    fn exploding_die_unlimited_chains_until_non_max() {
        let mut rng = SeqRng::new(vec![6, 6, 6, 2]);
        let roll = roll_exploding_die(6, ExplodeMode::Unlimited, &mut rng).unwrap();
        assert_eq!(roll.breakdown, vec![6, 6, 6, 2]);
        assert_eq!(roll.value, 20);
        assert_eq!(roll.display(), "6+6+6+2");
    }

    #[test]
    fn exploding_die_works_on_other_sizes() {
        let mut rng = SeqRng::new(vec![20, 15]);
        let roll = roll_exploding_die(20, ExplodeMode::Once, &mut rng).unwrap();
        assert_eq!(roll.breakdown, vec![20, 15]);
        assert_eq!(roll.value, 35);
        assert_eq!(roll.display(), "20+15");
    }

    #[test]
    fn exploding_die_rejects_small_sides() {
        let mut rng = SeqRng::new(vec![1]);
        assert_eq!(
            roll_exploding_die(1, ExplodeMode::Once, &mut rng),
            Err(Error::InvalidExplodingSides(1))
        );
        assert_eq!(
            roll_exploding_die(0, ExplodeMode::Unlimited, &mut rng),
            Err(Error::InvalidExplodingSides(0))
        );
    }

    #[test]
    fn exploding_die_unlimited_hits_the_cap() {
        // An RNG that always rolls max never stops exploding.
        let mut rng = SeqRng::new(vec![6]);
        assert_eq!(
            roll_exploding_die(6, ExplodeMode::Unlimited, &mut rng),
            Err(Error::ExplodeLimit(100))
        );
    }

    #[test]
    fn exploding_pool_counts_explosions() {
        // Die 1: 6, 3 (one explosion). Die 2: 2. Die 3: 6, 6 (capped at one by mode).
        let mut rng = SeqRng::new(vec![6, 3, 2, 6, 6]);
        let pool = roll_exploding(3, 6, ExplodeMode::Once, &mut rng).unwrap();
        assert_eq!(pool.values(), vec![9, 2, 12]);
        assert_eq!(pool.total, 23);
        assert_eq!(pool.explosions, 2);
    }

    #[test]
    fn explode_mode_parses_canonical_and_legacy_tokens() {
        assert_eq!("once".parse::<ExplodeMode>().unwrap(), ExplodeMode::Once);
        assert_eq!("standard".parse::<ExplodeMode>().unwrap(), ExplodeMode::Once);
        assert_eq!("unlimited".parse::<ExplodeMode>().unwrap(), ExplodeMode::Unlimited);
        assert_eq!("Compound".parse::<ExplodeMode>().unwrap(), ExplodeMode::Unlimited);
        assert!(matches!(
            "forever".parse::<ExplodeMode>(),
            Err(Error::InvalidExplodeMode(_))
        ));
    }

    proptest! {
        #[test]
        fn pool_length_and_total_hold(num in 1u32..50, sides in 1u32..100, seed in any::<u64>()) {
            let mut rng = FastRng::with_seed(seed);
            let pool = roll_dice(num, sides, &mut rng).unwrap();
            prop_assert_eq!(pool.rolls.len(), num as usize);
            prop_assert_eq!(pool.total, pool.rolls.iter().sum::<i64>());
            prop_assert!(pool.rolls.iter().all(|&r| r >= 1 && r <= sides as i64));
        }

        #[test]
        fn exploding_value_equals_breakdown_sum(sides in 2u32..20, seed in any::<u64>()) {
            let mut rng = FastRng::with_seed(seed);
            let roll = roll_exploding_die(sides, ExplodeMode::Unlimited, &mut rng).unwrap();
            prop_assert_eq!(roll.value, roll.breakdown.iter().sum::<i64>());
            // Every entry but the last must be the max face.
            for &face in &roll.breakdown[..roll.breakdown.len() - 1] {
                prop_assert_eq!(face, sides as i64);
            }
        }
    }
}
