use clap::ValueEnum;
use eight_puzzle_solver::{Board, CELLS, Direction};
use rand::Rng;

/// Curated starting boards, named by how hard they are to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Trivial,
    VeryEasy,
    Easy,
    Doable,
    OhBoy,
    Hard,
    VeryHard,
    Extreme,
}

impl Preset {
    pub fn tiles(&self) -> [u8; CELLS] {
        match self {
            Preset::Trivial => [1, 2, 3, 4, 5, 6, 7, 8, 0],
            Preset::VeryEasy => [1, 2, 3, 4, 5, 6, 0, 7, 8],
            Preset::Easy => [1, 2, 3, 5, 0, 6, 4, 7, 8],
            Preset::Doable => [1, 3, 6, 5, 0, 2, 4, 7, 8],
            Preset::OhBoy => [1, 3, 6, 5, 0, 7, 4, 8, 2],
            Preset::Hard => [1, 6, 7, 5, 0, 3, 4, 8, 2],
            Preset::VeryHard => [7, 1, 2, 4, 8, 5, 6, 3, 0],
            Preset::Extreme => [0, 7, 2, 4, 6, 1, 3, 5, 8],
        }
    }

    /// Length of the optimal solution.
    pub fn depth(&self) -> u32 {
        match self {
            Preset::Trivial => 0,
            Preset::VeryEasy => 2,
            Preset::Easy => 4,
            Preset::Doable => 8,
            Preset::OhBoy => 12,
            Preset::Hard => 16,
            Preset::VeryHard => 20,
            Preset::Extreme => 24,
        }
    }

    pub fn board(&self) -> anyhow::Result<Board> {
        Ok(Board::new(self.tiles())?)
    }
}

/// Walk `steps` random slides away from the goal, never undoing the previous
/// slide. The result is always solvable.
pub fn scramble<R: Rng>(steps: usize, rng: &mut R) -> Board {
    let mut board = Board::GOAL;
    let mut last: Option<Direction> = None;
    for _ in 0..steps {
        let candidates: Vec<(Board, Direction)> = Direction::ALL
            .iter()
            .filter(|&&direction| last != Some(direction.opposite()))
            .filter_map(|&direction| board.slide(direction).map(|next| (next, direction)))
            .collect();
        let (next, direction) = candidates[rng.random_range(0..candidates.len())];
        board = next;
        last = Some(direction);
    }
    board
}
