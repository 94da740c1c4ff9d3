use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A square grid of single-character cells, row-major (`rows[y][x]`).
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let size = rows.len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    row: y,
                    len: row.len(),
                    expected: size,
                });
            }
        }
        Ok(Self { size, rows })
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The character at column `x`, row `y` (0-indexed). Out-of-bounds
    /// lookups happen constantly while walking candidate directions, so
    /// they return `None` rather than an error.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}
