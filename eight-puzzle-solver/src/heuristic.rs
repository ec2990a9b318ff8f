use super::*;

use std::fmt;

/// The estimate that turns the generic best-first search into a specific
/// algorithm. `Zero` makes it Uniform Cost Search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    #[default]
    Zero,
    MisplacedTiles,
    ManhattanDistance,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Zero,
        Heuristic::MisplacedTiles,
        Heuristic::ManhattanDistance,
    ];

    /// Estimated remaining cost. Never overestimates, and is zero only at the goal
    /// (except for `Zero`, which is zero everywhere).
    #[inline]
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }

    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Heuristic::Zero => "Uniform Cost Search",
            Heuristic::MisplacedTiles => "A* with Misplaced Tile heuristic",
            Heuristic::ManhattanDistance => "A* with Manhattan Distance heuristic",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Number of non-blank tiles not on their goal cell.
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(GOAL.iter())
        .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
        .count() as u32
}

/// Sum over non-blank tiles of the grid distance to their goal cell.
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(position, &tile)| {
            let goal = tile as usize - 1;
            let d_row = (position / SIDE).abs_diff(goal / SIDE);
            let d_col = (position % SIDE).abs_diff(goal % SIDE);
            (d_row + d_col) as u32
        })
        .sum()
}
