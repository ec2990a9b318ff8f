use thiserror::Error;

/// A board that is not a permutation of the tiles `0..=8`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} tiles, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("tile {value} at position {position} is outside 0..=8")]
    OutOfRange { value: u8, position: usize },

    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },

    #[error("invalid token '{token}'")]
    InvalidToken { token: String },
}

/// Why [`crate::solve`] could not produce a solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    #[error("board is unsolvable ({inversions} inversions, odd parity)")]
    Unsolvable { inversions: usize },

    #[error("no solution found after expanding {nodes_expanded} nodes")]
    NoSolutionFound { nodes_expanded: usize },

    #[error("search aborted; reached max expansions {limit} ({nodes_expanded} expanded)")]
    SearchAborted { limit: usize, nodes_expanded: usize },
}
