// ABOUTME: Drop/keep selection over a pool of rolled values.
// ABOUTME: Discards the lowest or highest N values, keeping the rest.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which end of the sorted pool to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Lowest,
    Highest,
}

impl FromStr for DropKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowest" => Ok(DropKind::Lowest),
            "highest" => Ok(DropKind::Highest),
            _ => Err(Error::InvalidDropKind(s.to_string())),
        }
    }
}

impl fmt::Display for DropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropKind::Lowest => write!(f, "lowest"),
            DropKind::Highest => write!(f, "highest"),
        }
    }
}

/// Result of a drop/keep selection.
///
/// `kept` and `dropped` come back sorted ascending by value; only the
/// multiset of values is guaranteed, not which pool position was dropped
/// when values tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub kept: Vec<i64>,
    pub dropped: Vec<i64>,
    /// Sum of the kept values.
    pub total: i64,
}

/// Drop `drop_count` dice from the pool, keeping the rest.
///
/// At least one die must remain, so `drop_count` must be strictly less
/// than the pool size.
pub fn drop_dice(rolls: &[i64], drop_count: usize, kind: DropKind) -> Result<DropResult> {
    if rolls.is_empty() {
        return Err(Error::EmptyPool);
    }
    if drop_count >= rolls.len() {
        return Err(Error::InvalidDropCount {
            drop_count,
            pool_size: rolls.len(),
        });
    }

    let mut sorted = rolls.to_vec();
    sorted.sort();

    let (dropped, kept) = match kind {
        DropKind::Lowest => {
            let kept = sorted.split_off(drop_count);
            (sorted, kept)
        }
        DropKind::Highest => {
            let dropped = sorted.split_off(sorted.len() - drop_count);
            (dropped, sorted)
        }
    };

    let total = kept.iter().sum();

    Ok(DropResult { kept, dropped, total })
}
