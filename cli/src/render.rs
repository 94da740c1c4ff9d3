use wordseek_core::{Puzzle, Solution};

/// The puzzle as handed to a player: the raw letter grid and the words
/// to hunt for.
pub fn unsolved(puzzle: &Puzzle) -> String {
    format!(
        "** WORD SEARCH PUZZLE **\n\n{}\n\nWords: {}\n",
        grid_lines(puzzle.grid().rows()),
        puzzle.words().join(", ")
    )
}

/// The answers view: a blank grid with only the located words painted
/// in, plus each word's location in answer-key syntax.
pub fn solved(puzzle: &Puzzle, solution: &Solution) -> String {
    let size = puzzle.grid().size();
    let mut rows = vec![vec!['.'; size]; size];

    for (word, location) in solution.entries() {
        let positions = location.positions(word.chars().count());
        for (ch, (x, y)) in word.chars().zip(positions) {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                if x < size && y < size {
                    rows[y][x] = ch;
                }
            }
        }
    }

    let words = solution
        .entries()
        .iter()
        .map(|(word, location)| format!("{} {}", word, location))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "** WORD SEARCH PUZZLE: ANSWERS **\n\n{}\n\nWords: {}\n",
        grid_lines(&rows),
        words
    )
}

fn grid_lines(rows: &[Vec<char>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
