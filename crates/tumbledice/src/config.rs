// ABOUTME: Validated roll configuration and the composed rolling pipeline.
// ABOUTME: Roll (plain or exploding) -> optional drop -> optional tally -> optional vantage.

use crate::advantage::{pick, Pick, Vantage};
use crate::error::{Error, Result};
use crate::rng::{FastRng, Rng};
use crate::roller::{roll_dice, roll_exploding, ExplodeMode, ExplodingRoll};
use crate::select::{drop_dice, DropKind};
use crate::success::{count_successes, Compare, SuccessTally};

/// Upper bound on the number of dice in one roll.
pub const MAX_DICE: u32 = 1000;
/// Bounds on the number of sides per die for configured rolls.
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 1_000_000;

/// A drop/keep rule: discard `count` dice from the named end of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRule {
    pub kind: DropKind,
    pub count: u32,
}

/// A success-counting rule: score the roll by how many kept dice pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessRule {
    pub compare: Compare,
    pub threshold: i64,
}

/// A complete, caller-owned roll configuration.
///
/// Mirrors everything a front end can ask for in one roll: pool size and die
/// type, optional exploding mode, optional drop/keep rule, optional success
/// rule, and optional advantage/disadvantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollConfig {
    pub num_dice: u32,
    pub dice_type: u32,
    pub explode: Option<ExplodeMode>,
    pub drop: Option<DropRule>,
    pub success: Option<SuccessRule>,
    pub vantage: Option<Vantage>,
}

impl RollConfig {
    /// A plain pool roll with no mechanics attached.
    pub fn new(num_dice: u32, dice_type: u32) -> Self {
        Self {
            num_dice,
            dice_type,
            explode: None,
            drop: None,
            success: None,
            vantage: None,
        }
    }

    /// Check every bound before any die is rolled.
    pub fn validate(&self) -> Result<()> {
        if self.num_dice < 1 {
            return Err(Error::InvalidDiceCount(self.num_dice));
        }
        if self.num_dice > MAX_DICE {
            return Err(Error::DiceCountOutOfRange {
                count: self.num_dice,
                max: MAX_DICE,
            });
        }
        if self.dice_type < MIN_SIDES || self.dice_type > MAX_SIDES {
            return Err(Error::SidesOutOfRange {
                sides: self.dice_type,
                min: MIN_SIDES,
                max: MAX_SIDES,
            });
        }
        if let Some(rule) = &self.drop {
            if rule.count < 1 || rule.count >= self.num_dice {
                return Err(Error::InvalidDropCount {
                    drop_count: rule.count as usize,
                    pool_size: self.num_dice as usize,
                });
            }
        }
        if let Some(rule) = &self.success {
            if rule.threshold < 1 {
                return Err(Error::InvalidThreshold(rule.threshold));
            }
        }
        Ok(())
    }

    /// Roll this configuration with the default RNG.
    pub fn roll(&self) -> Result<Outcome> {
        self.roll_with_rng(&mut FastRng::new())
    }

    /// Roll this configuration with a caller-supplied RNG.
    ///
    /// With a vantage set, the whole configuration is rolled twice and the
    /// better (advantage) or worse (disadvantage) outcome is kept; exact
    /// score ties keep the first-rolled outcome. The rejected outcome is
    /// retained on [`Outcome::discarded`].
    pub fn roll_with_rng(&self, rng: &mut impl Rng) -> Result<Outcome> {
        self.validate()?;

        let Some(vantage) = self.vantage else {
            return self.roll_once(rng);
        };

        let first = self.roll_once(rng)?;
        let second = self.roll_once(rng)?;
        let (mut chosen, rejected) = match pick(vantage, first.score(), second.score()) {
            Pick::First => (first, second),
            Pick::Second => (second, first),
        };
        chosen.discarded = Some(Box::new(rejected));
        Ok(chosen)
    }

    fn roll_once(&self, rng: &mut impl Rng) -> Result<Outcome> {
        let (rolls, breakdowns) = match self.explode {
            None => {
                let pool = roll_dice(self.num_dice, self.dice_type, rng)?;
                (pool.rolls, Vec::new())
            }
            Some(mode) => {
                let pool = roll_exploding(self.num_dice, self.dice_type, mode, rng)?;
                (pool.values(), pool.rolls)
            }
        };

        let (kept, dropped) = match &self.drop {
            Some(rule) => {
                let result = drop_dice(&rolls, rule.count as usize, rule.kind)?;
                (result.kept, result.dropped)
            }
            None => (rolls.clone(), Vec::new()),
        };

        let total = kept.iter().sum();
        let tally = self
            .success
            .as_ref()
            .map(|rule| count_successes(&kept, rule.threshold, rule.compare));

        Ok(Outcome {
            rolls,
            breakdowns,
            kept,
            dropped,
            tally,
            total,
            discarded: None,
        })
    }
}

/// Result of rolling a full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Per-die values in roll order, explosion chains already summed.
    pub rolls: Vec<i64>,
    /// Explosion breakdowns parallel to `rolls`; empty for plain rolls.
    pub breakdowns: Vec<ExplodingRoll>,
    /// Values kept after the drop rule (all of `rolls` when no rule is set),
    /// sorted ascending when a drop occurred.
    pub kept: Vec<i64>,
    /// Values discarded by the drop rule, sorted ascending.
    pub dropped: Vec<i64>,
    /// Success tally over the kept values, when a success rule is set.
    pub tally: Option<SuccessTally>,
    /// Sum of the kept values.
    pub total: i64,
    /// The outcome rejected by advantage/disadvantage, when a vantage was set.
    pub discarded: Option<Box<Outcome>>,
}

impl Outcome {
    /// The number this roll is judged by: the success count when a success
    /// rule is set, otherwise the kept total.
    pub fn score(&self) -> i64 {
        match &self.tally {
            Some(tally) => tally.success_count as i64,
            None => self.total,
        }
    }
}
