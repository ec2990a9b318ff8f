//! This crate solves the 8-puzzle with a single best-first search engine,
//! instantiated as Uniform Cost Search or as A* with the misplaced-tile or
//! Manhattan-distance heuristic.

mod board;
mod error;
mod frontier;
mod heuristic;
mod move_;
mod node;
mod solvable;
mod solver;

use crate::frontier::*;

pub use crate::board::{Board, CELLS, GOAL, SIDE};
pub use crate::error::{BoardError, SolveError};
pub use crate::heuristic::{Heuristic, manhattan_distance, misplaced_tiles};
pub use crate::move_::{Direction, Successors, format_directions, successors};
pub use crate::node::{Ancestors, NodeId, SearchNode, SearchTree, reconstruct};
pub use crate::solvable::{count_inversions, is_solvable};
pub use crate::solver::{SearchOutcome, SearchReport, Solution, Solver, search, solve};
