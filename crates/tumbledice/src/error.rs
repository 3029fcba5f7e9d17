// ABOUTME: Error types for the tumbledice library.
// ABOUTME: Every variant is a precondition violation reported to the direct caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid number of dice: {0}. Must be at least 1.")]
    InvalidDiceCount(u32),

    #[error("Invalid dice sides: {0}. Must be a positive integer.")]
    InvalidDiceSides(u32),

    #[error("Invalid dice sides: {0}. Exploding dice need at least 2 sides.")]
    InvalidExplodingSides(u32),

    #[error("Rolls must be a non-empty pool")]
    EmptyPool,

    #[error("Cannot drop {drop_count} dice from {pool_size} dice")]
    InvalidDropCount { drop_count: usize, pool_size: usize },

    #[error("Invalid drop type: '{0}'. Must be 'lowest' or 'highest'.")]
    InvalidDropKind(String),

    #[error("Invalid vantage: '{0}'. Must be 'advantage' or 'disadvantage'.")]
    InvalidVantage(String),

    #[error("Invalid comparison: '{0}'")]
    InvalidComparison(String),

    #[error("Invalid explode mode: '{0}'. Must be 'once' or 'unlimited'.")]
    InvalidExplodeMode(String),

    #[error("Invalid dice notation: '{0}'")]
    InvalidNotation(String),

    #[error("Invalid dice value: '{0}'. Use a number (e.g. 20) or dice notation (e.g. d20).")]
    InvalidDiceValue(String),

    #[error("Number of dice is too large: {count} (maximum {max})")]
    DiceCountOutOfRange { count: u32, max: u32 },

    #[error("Number of sides is out of range: {sides} (allowed {min}..={max})")]
    SidesOutOfRange { sides: u32, min: u32, max: u32 },

    #[error("Invalid success threshold: {0}. Must be at least 1.")]
    InvalidThreshold(i64),

    #[error("Invalid number of trials: {0}. Must be at least 1.")]
    InvalidTrialCount(usize),

    #[error("Explode limit exceeded (max {0} explosions)")]
    ExplodeLimit(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
