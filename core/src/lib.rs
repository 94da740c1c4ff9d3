pub mod direction;
pub mod grid;
pub mod location;
pub mod puzzle;

pub use direction::Direction;
pub use grid::{Grid, GridError};
pub use location::Location;
pub use puzzle::{AnswerKey, Puzzle, Solution, SolveError};
