// ABOUTME: Dice notation parsing ("3d6", "d20") and result formatting.
// ABOUTME: Converts between text notation and structured (count, sides) pairs.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed dice notation such as "3d6" or "d20".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// Number of dice (1 when the count is omitted, as in "d20").
    pub num_dice: u32,
    /// Number of sides per die.
    pub dice_type: u32,
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let Some((count_part, sides_part)) = split_on_d(trimmed) else {
            return Err(Error::InvalidNotation(s.to_string()));
        };

        let num_dice = if count_part.is_empty() {
            1
        } else {
            parse_digits(count_part).ok_or_else(|| Error::InvalidNotation(s.to_string()))?
        };
        let dice_type =
            parse_digits(sides_part).ok_or_else(|| Error::InvalidNotation(s.to_string()))?;

        if num_dice < 1 || dice_type < 1 {
            return Err(Error::InvalidNotation(s.to_string()));
        }

        Ok(Notation { num_dice, dice_type })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num_dice, self.dice_type)
    }
}

/// Split "3d6" into ("3", "6") around a case-insensitive 'd'.
fn split_on_d(s: &str) -> Option<(&str, &str)> {
    let pos = s.find(['d', 'D'])?;
    Some((&s[..pos], &s[pos + 1..]))
}

/// Parse a non-empty all-digit string, saturating like the notation lexer
/// would rather than overflowing.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut value: u32 = 0;
    for c in s.chars() {
        value = value.saturating_mul(10).saturating_add(c.to_digit(10).unwrap_or(0));
    }
    Some(value)
}

/// Parse a dice notation string into its (count, sides) pair.
pub fn parse_dice_notation(notation: &str) -> Result<Notation> {
    notation.parse()
}

/// Parse a value that is either a plain integer ("20") or bare dice
/// notation ("d20"), as accepted by roll configuration inputs.
pub fn parse_dice_value(value: &str) -> Result<u32> {
    let trimmed = value.trim();

    if let Some(rest) = trimmed.strip_prefix(['d', 'D']) {
        return parse_digits(rest).ok_or_else(|| Error::InvalidDiceValue(value.to_string()));
    }
    parse_digits(trimmed).ok_or_else(|| Error::InvalidDiceValue(value.to_string()))
}

/// Format a roll for display: "Rolled 3d6 (3, 6, 1) = 10".
pub fn format_dice_roll(num_dice: u32, dice_type: u32, rolls: &[i64], total: i64) -> String {
    let rolls_string = join_rolls(rolls);
    format!("Rolled {num_dice}d{dice_type} ({rolls_string}) = {total}")
}

/// Format a drop/keep roll for display:
/// "Rolled 4d6, drop lowest 1: (3, 6, 1, 4) → kept (3, 6, 4) = 13".
pub fn format_drop_roll(
    num_dice: u32,
    dice_type: u32,
    drop_kind: &str,
    drop_count: usize,
    all_rolls: &[i64],
    kept_rolls: &[i64],
    total: i64,
) -> String {
    let all = join_rolls(all_rolls);
    let kept = join_rolls(kept_rolls);
    format!(
        "Rolled {num_dice}d{dice_type}, drop {drop_kind} {drop_count}: ({all}) \u{2192} kept ({kept}) = {total}"
    )
}

fn join_rolls(rolls: &[i64]) -> String {
    rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
