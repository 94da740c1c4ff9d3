use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a word was found: the 1-indexed row and column of its first
/// letter plus the direction it reads along.
///
/// The `Display` form, `"E @ (12, 6)"`, is a binding contract with the
/// answer-key syntax emitted by word-search generators: row comes before
/// column inside the parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(direction: Direction, row: usize, col: usize) -> Self {
        Self {
            direction,
            row,
            col,
        }
    }

    /// 0-indexed (x, y) grid coordinates covered by a word of length
    /// `len` placed here, first letter first.
    pub fn positions(&self, len: usize) -> Vec<(i32, i32)> {
        let (dx, dy) = self.direction.delta();
        let x0 = self.col as i32 - 1;
        let y0 = self.row as i32 - 1;
        (0..len as i32).map(|i| (x0 + dx * i, y0 + dy * i)).collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.direction, self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed location: \"{0}\"")]
pub struct ParseLocationError(String);

/// Inverse of `Display`: parses `"E @ (12, 6)"` back into a location,
/// rejecting anything that strays from the answer-key syntax, including
/// 0-indexed coordinates.
impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLocationError(s.to_string());

        let (direction, coords) = s.split_once(" @ ").ok_or_else(err)?;
        let direction: Direction = direction.parse().map_err(|_| err())?;
        let coords = coords
            .strip_prefix('(')
            .and_then(|c| c.strip_suffix(')'))
            .ok_or_else(err)?;
        let (row, col) = coords.split_once(", ").ok_or_else(err)?;
        let row: usize = row.parse().map_err(|_| err())?;
        let col: usize = col.parse().map_err(|_| err())?;
        if row == 0 || col == 0 {
            return Err(err());
        }

        Ok(Self {
            direction,
            row,
            col,
        })
    }
}
