mod error;
pub use error::LoaderError;

mod puzzle_file;
pub use puzzle_file::PuzzleFile;
