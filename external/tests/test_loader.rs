use std::io::Write;
use wordseek_core::GridError;
use wordseek_external::{LoaderError, PuzzleFile};

const SAMPLE: &str = "\
WORD SEARCH
-----------
C,A,T,Q,D
X,Z,B,Q,O
Q,X,B,S,G
F,Q,U,H,J
K,N,L,M,P

Find these words: \"CAT, DOG, SUN\"
* Words can go N, NE, E, SE, S, SW, W, and NW.

Answer Key: CAT E @ (1, 1), DOG S @ (1, 5), SUN SW @ (3, 4)
";

#[test]
fn test_parse_sample() {
    let file = PuzzleFile::parse(SAMPLE).expect("sample parses");
    let puzzle = &file.puzzle;

    assert_eq!(puzzle.grid().size(), 5);
    assert_eq!(puzzle.grid().get(0, 0), Some('C'));
    assert_eq!(puzzle.grid().get(4, 4), Some('P'));
    assert_eq!(puzzle.words(), ["CAT", "DOG", "SUN"]);

    let key = file.answer_key.expect("sample has an answer key");
    assert_eq!(key.len(), 3);
    assert_eq!(key["DOG"], "S @ (1, 5)");
}

#[test]
fn test_parsed_puzzle_solves_against_its_key() {
    let file = PuzzleFile::parse(SAMPLE).unwrap();
    let key = file.answer_key.unwrap();

    let solution = file
        .puzzle
        .solve_checked(&key)
        .expect("solver agrees with the generator's key");
    assert_eq!(solution.get("SUN").unwrap().to_string(), "SW @ (3, 4)");
}

#[test]
fn test_load_from_path() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(SAMPLE.as_bytes()).unwrap();

    let file = PuzzleFile::load(tmp.path()).expect("file loads");
    assert_eq!(file.puzzle.words().len(), 3);
}

#[test]
fn test_load_missing_file() {
    let result = PuzzleFile::load("does/not/exist.txt");
    assert!(matches!(result, Err(LoaderError::Io(_))));
}

#[test]
fn test_missing_grid() {
    let text = "WORD SEARCH\n\nFind these words: \"CAT\"\n";
    assert!(matches!(
        PuzzleFile::parse(text),
        Err(LoaderError::MissingGrid)
    ));
}

#[test]
fn test_missing_words() {
    let text = "WORD SEARCH\n-----------\nA,B\nC,D\n";
    assert!(matches!(
        PuzzleFile::parse(text),
        Err(LoaderError::MissingWords)
    ));

    // A marker line with nothing after it is as good as no marker.
    let text = "A,B\nC,D\n\nFind these words: \"\"\n";
    assert!(matches!(
        PuzzleFile::parse(text),
        Err(LoaderError::MissingWords)
    ));
}

#[test]
fn test_non_square_grid() {
    let text = "A,B,C\nD,E\nF,G,H\n\nFind these words: \"AB\"\n";
    assert!(matches!(
        PuzzleFile::parse(text),
        Err(LoaderError::Grid(GridError::NotSquare { row: 1, .. }))
    ));
}

#[test]
fn test_multi_character_cell() {
    let text = "A,B\nC,DD\n\nFind these words: \"AB\"\n";
    match PuzzleFile::parse(text) {
        Err(LoaderError::BadCell { row, cell }) => {
            assert_eq!(row, 1);
            assert_eq!(cell, "DD");
        }
        other => panic!("expected BadCell, got {:?}", other),
    }
}

#[test]
fn test_comma_in_header_is_not_a_row() {
    let text = "WORD SEARCH, VOL 2\n-----------\nC,A\nT,X\n\nFind these words: \"CA\"\n";
    let file = PuzzleFile::parse(text).expect("header comma is skipped");
    assert_eq!(file.puzzle.grid().size(), 2);
    assert_eq!(file.puzzle.grid().get(0, 0), Some('C'));
}

#[test]
fn test_answer_key_is_optional() {
    let text = "C,A\nT,X\n\nFind these words: \"CA\"\n";
    let file = PuzzleFile::parse(text).unwrap();
    assert!(file.answer_key.is_none());
    assert_eq!(
        file.puzzle.solve().unwrap().get("CA").unwrap().to_string(),
        "E @ (1, 1)"
    );
}
