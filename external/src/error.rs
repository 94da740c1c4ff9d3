use thiserror::Error;
use wordseek_core::GridError;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no puzzle grid found in input")]
    MissingGrid,

    #[error("no word list found in input")]
    MissingWords,

    #[error("cell \"{cell}\" in grid row {row} is not a single character")]
    BadCell { row: usize, cell: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}
