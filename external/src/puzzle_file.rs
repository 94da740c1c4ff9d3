use crate::error::LoaderError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fs, path::Path};
use wordseek_core::{AnswerKey, Grid, Puzzle};

/// One `WORD E @ (12, 6)` entry inside the answer-key line.
static ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]+) ([NSEW]{1,2} @ \([0-9]+, [0-9]+\))")
        .expect("answer key pattern compiles")
});

const WORDS_MARKER: &str = "Find these words:";
const ANSWERS_MARKER: &str = "Answer Key:";

/// A puzzle parsed from the text layout emitted by word-search
/// generators: a block of comma-separated grid rows, a `Find these
/// words:` line, and optionally an `Answer Key:` line. Header lines
/// above the grid are skipped even when they contain commas, unless
/// every comma-separated field is a single character — such a line is
/// indistinguishable from a grid row and is treated as one.
#[derive(Debug, Clone)]
pub struct PuzzleFile {
    pub puzzle: Puzzle,
    pub answer_key: Option<AnswerKey>,
}

impl PuzzleFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, LoaderError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        let mut grid_done = false;
        let mut words: Option<Vec<String>> = None;
        let mut answer_key: Option<AnswerKey> = None;

        for line in text.lines() {
            let line = line.trim_end();

            if let Some((_, rest)) = line.split_once(WORDS_MARKER) {
                words = Some(parse_words(rest));
                continue;
            }
            if let Some((_, rest)) = line.split_once(ANSWERS_MARKER) {
                answer_key = Some(parse_answer_key(rest));
                continue;
            }

            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() > 1 && !grid_done {
                match parse_row(rows.len(), &cells) {
                    Ok(row) => rows.push(row),
                    // A comma-bearing line above the grid (a title like
                    // "WORD SEARCH, VOL 2") is a header, not a row. Once
                    // rows have started, a malformed cell is an error.
                    Err(_) if rows.is_empty() => {}
                    Err(e) => return Err(e),
                }
            } else if !rows.is_empty() {
                // First non-row line after the grid block ends it; stray
                // comma-bearing lines further down must not be mistaken
                // for rows.
                grid_done = true;
            }
        }

        if rows.is_empty() {
            return Err(LoaderError::MissingGrid);
        }
        let words = words.filter(|w| !w.is_empty()).ok_or(LoaderError::MissingWords)?;
        let grid = Grid::from_rows(rows)?;

        Ok(Self {
            puzzle: Puzzle::new(grid, words),
            answer_key,
        })
    }
}

fn parse_row(index: usize, cells: &[&str]) -> Result<Vec<char>, LoaderError> {
    let mut row = Vec::with_capacity(cells.len());
    for cell in cells {
        let mut chars = cell.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => row.push(c),
            _ => {
                return Err(LoaderError::BadCell {
                    row: index,
                    cell: (*cell).to_string(),
                });
            }
        }
    }
    Ok(row)
}

fn parse_words(rest: &str) -> Vec<String> {
    rest.trim_matches(|c: char| c == '"' || c.is_whitespace())
        .split(", ")
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_answer_key(rest: &str) -> AnswerKey {
    ANSWER_RE
        .captures_iter(rest)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
