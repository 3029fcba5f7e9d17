// ABOUTME: Core library for tabletop dice mechanics.
// ABOUTME: Exploding dice, drop/keep, success counting, and advantage, with RNG abstraction.

//! # Tumbledice
//!
//! Dice mechanics for tabletop games: plain pools, exploding dice,
//! drop/keep selection, success counting, and advantage/disadvantage.
//!
//! ## Quick Start
//!
//! ```
//! use tumbledice::{roll, format_dice_roll};
//!
//! // Roll dice from notation
//! let pool = roll("3d6").unwrap();
//! assert_eq!(pool.rolls.len(), 3);
//! assert_eq!(pool.total, pool.rolls.iter().sum::<i64>());
//!
//! // Render a history line: "Rolled 3d6 (3, 6, 1) = 10"
//! println!("{}", format_dice_roll(3, 6, &pool.rolls, pool.total));
//! ```
//!
//! Composed rolls go through [`RollConfig`]:
//!
//! ```
//! use tumbledice::{DropKind, DropRule, FastRng, RollConfig};
//!
//! let config = RollConfig {
//!     drop: Some(DropRule { kind: DropKind::Lowest, count: 1 }),
//!     ..RollConfig::new(4, 6)
//! };
//! let outcome = config.roll_with_rng(&mut FastRng::with_seed(42)).unwrap();
//! assert_eq!(outcome.kept.len(), 3);
//! ```
//!
//! Every rolling function takes the RNG through the [`Rng`] trait, so tests
//! can script exact face sequences; nothing in the crate holds state across
//! calls.

pub mod advantage;
pub mod config;
pub mod error;
pub mod notation;
pub mod rng;
pub mod roller;
pub mod select;
pub mod sim;
pub mod success;

pub use advantage::{advantage, disadvantage, pick, Pick, Vantage};
pub use config::{DropRule, Outcome, RollConfig, SuccessRule, MAX_DICE, MAX_SIDES, MIN_SIDES};
pub use error::{Error, Result};
pub use notation::{
    format_dice_roll, format_drop_roll, parse_dice_notation, parse_dice_value, Notation,
};
pub use rng::{FastRng, Rng};
pub use roller::{
    roll_dice, roll_exploding, roll_exploding_die, roll_single_die, DicePool, ExplodeMode,
    ExplodingPool, ExplodingRoll,
};
pub use select::{drop_dice, DropKind, DropResult};
pub use sim::{simulate, simulate_seeded, SimResult};
pub use success::{count_successes, Compare, SuccessTally};

/// Parse dice notation and roll the pool in one step.
///
/// # Examples
///
/// ```
/// let pool = tumbledice::roll("2d6").unwrap();
/// assert!(pool.total >= 2 && pool.total <= 12);
/// ```
pub fn roll(notation: &str) -> Result<DicePool> {
    roll_with_rng(notation, &mut FastRng::new())
}

/// Parse dice notation and roll with a custom RNG.
///
/// Useful for testing or when you need reproducible results.
///
/// # Examples
///
/// ```
/// use tumbledice::{roll_with_rng, FastRng};
///
/// let mut rng = FastRng::with_seed(42);
/// let pool = roll_with_rng("2d6", &mut rng).unwrap();
/// ```
pub fn roll_with_rng(notation: &str, rng: &mut impl Rng) -> Result<DicePool> {
    let parsed: Notation = notation.parse()?;
    roll_dice(parsed.num_dice, parsed.dice_type, rng)
}
