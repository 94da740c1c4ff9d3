use crate::{Direction, Grid, Location};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// Expected solution supplied alongside a puzzle, mapping each word to a
/// location string in the `"E @ (12, 6)"` syntax. Used only to validate
/// what the solver computes.
pub type AnswerKey = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("word \"{word}\" not found in the grid")]
    WordNotFound { word: String },

    #[error("answer key mismatch for \"{word}\": key says {expected}, solver found {found}")]
    ValidationMismatch {
        word: String,
        expected: String,
        found: String,
    },

    #[error("answer key has no entry for \"{word}\"")]
    MissingAnswer { word: String },

    #[error("answer key entry \"{word}\" is not in the word list")]
    ExtraAnswer { word: String },
}

/// A solved puzzle: one located position per requested word, in the
/// order the words were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    entries: Vec<(String, Location)>,
}

impl Solution {
    pub fn entries(&self) -> &[(String, Location)] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<&Location> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, location)| location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serializes as a word -> location-string map so the JSON output matches
// the answer-key syntax exactly.
impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, location) in &self.entries {
            map.serialize_entry(word, &location.to_string())?;
        }
        map.end()
    }
}

/// A word-search puzzle: a square letter grid and the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<String>) -> Self {
        Self { grid, words }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Locate a single word. Cells are scanned in row-major order and the
    /// eight directions are tried in [`Direction::ALL`] order from every
    /// cell matching the word's first letter; the first full match wins,
    /// which makes results reproducible when several placements exist.
    pub fn find_word(&self, word: &str) -> Result<Location, SolveError> {
        let mut chars = word.chars();
        let not_found = || SolveError::WordNotFound {
            word: word.to_string(),
        };
        let first = chars.next().ok_or_else(not_found)?;
        let rest: Vec<char> = chars.collect();

        let size = self.grid.size() as i32;
        for y in 0..size {
            for x in 0..size {
                if self.grid.get(x, y) != Some(first) {
                    continue;
                }
                for direction in Direction::ALL {
                    if self.matches_rest(x, y, direction, &rest) {
                        // 1-indexed, row before column.
                        return Ok(Location::new(
                            direction,
                            (y + 1) as usize,
                            (x + 1) as usize,
                        ));
                    }
                }
            }
        }
        Err(not_found())
    }

    /// Walk from the start cell along `direction`, one step per remaining
    /// character. Stepping off the grid simply fails the candidate.
    fn matches_rest(&self, mut x: i32, mut y: i32, direction: Direction, rest: &[char]) -> bool {
        let (dx, dy) = direction.delta();
        for &expected in rest {
            x += dx;
            y += dy;
            if self.grid.get(x, y) != Some(expected) {
                return false;
            }
        }
        true
    }

    /// Locate every word in the puzzle's word list, in list order. Fails
    /// on the first word that cannot be found; there is no partial result.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        let mut entries = Vec::with_capacity(self.words.len());
        for word in &self.words {
            entries.push((word.clone(), self.find_word(word)?));
        }
        Ok(Solution { entries })
    }

    /// Solve and then check the result against an answer key. Any
    /// difference — a mismatched location, a word the key lacks, or a key
    /// entry for a word we were never asked about — is fatal: it means
    /// either a solver defect or an inconsistent puzzle file, and neither
    /// deserves a trusted-looking result.
    pub fn solve_checked(&self, key: &AnswerKey) -> Result<Solution, SolveError> {
        let solution = self.solve()?;
        for (word, location) in solution.entries() {
            let expected = key.get(word).ok_or_else(|| SolveError::MissingAnswer {
                word: word.clone(),
            })?;
            let found = location.to_string();
            if *expected != found {
                return Err(SolveError::ValidationMismatch {
                    word: word.clone(),
                    expected: expected.clone(),
                    found,
                });
            }
        }
        for word in key.keys() {
            if !self.words.iter().any(|w| w == word) {
                return Err(SolveError::ExtraAnswer {
                    word: word.clone(),
                });
            }
        }
        Ok(solution)
    }
}
