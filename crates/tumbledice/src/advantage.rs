// ABOUTME: Advantage/disadvantage selection between two independently rolled outcomes.
// ABOUTME: Pure comparison over scores; exact ties keep the first-rolled outcome.

use crate::roller::DicePool;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Whether to keep the better or the worse of two rolled outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vantage {
    Advantage,
    Disadvantage,
}

impl FromStr for Vantage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advantage" => Ok(Vantage::Advantage),
            "disadvantage" => Ok(Vantage::Disadvantage),
            _ => Err(Error::InvalidVantage(s.to_string())),
        }
    }
}

impl fmt::Display for Vantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vantage::Advantage => write!(f, "advantage"),
            Vantage::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

/// Which of two outcomes was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Second,
}

/// Choose between two scores. The second outcome is picked only when it is
/// strictly better (advantage) or strictly worse (disadvantage); exact ties
/// keep the first-rolled outcome.
pub fn pick(vantage: Vantage, first: i64, second: i64) -> Pick {
    let second_wins = match vantage {
        Vantage::Advantage => second > first,
        Vantage::Disadvantage => second < first,
    };
    if second_wins {
        Pick::Second
    } else {
        Pick::First
    }
}

/// Keep the higher-total of two pools, first pool winning ties.
pub fn advantage<'a>(first: &'a DicePool, second: &'a DicePool) -> &'a DicePool {
    match pick(Vantage::Advantage, first.total, second.total) {
        Pick::First => first,
        Pick::Second => second,
    }
}

/// Keep the lower-total of two pools, first pool winning ties.
pub fn disadvantage<'a>(first: &'a DicePool, second: &'a DicePool) -> &'a DicePool {
    match pick(Vantage::Disadvantage, first.total, second.total) {
        Pick::First => first,
        Pick::Second => second,
    }
}
