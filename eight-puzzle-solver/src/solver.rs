use super::*;

use ahash::AHashSet;
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Solve `tiles` with the given heuristic, optionally capping the number of
/// expansions.
///
/// Rejects malformed and unsolvable boards before any search is attempted.
pub fn solve(
    tiles: &[u8],
    heuristic: Heuristic,
    max_expansions: Option<usize>,
) -> Result<Solution, SolveError> {
    let board = Board::from_slice(tiles)?;
    let mut solver = Solver::new(heuristic);
    if let Some(limit) = max_expansions {
        solver = solver.with_max_expansions(limit);
    }
    solver.solve(board)
}

/// Run an uncapped search from `initial`. No solvability check is made.
pub fn search(initial: Board, heuristic: Heuristic) -> SearchReport {
    Solver::new(heuristic).search(initial)
}

/// Best-first search over boards, ordered by `f = g + h`.
///
/// Uniform Cost Search and both A* variants are this same loop with a
/// different [`Heuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    heuristic: Heuristic,
    max_expansions: Option<usize>,
}

impl Solver {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            max_expansions: None,
        }
    }

    /// Stop with [`SearchOutcome::Aborted`] instead of expanding more than
    /// `limit` nodes.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Check solvability, search, and turn the report into a [`Solution`].
    pub fn solve(&self, board: Board) -> Result<Solution, SolveError> {
        if !board.is_solvable() {
            return Err(SolveError::Unsolvable {
                inversions: count_inversions(board.tiles()),
            });
        }
        self.search(board).into_solution()
    }

    /// Search from `initial` until the goal is popped, the frontier empties, or
    /// the expansion cap is hit. Each call owns a fresh frontier and explored
    /// set, so repeated calls never affect each other.
    pub fn search(&self, initial: Board) -> SearchReport {
        let timer = Instant::now();
        let heuristic = self.heuristic;
        let mut tree = SearchTree::new();
        let root = tree.insert_root(initial, heuristic.evaluate(&initial));

        debug!(
            "search started; algorithm: {heuristic}, initial: {:?}",
            initial.tiles()
        );

        if initial.is_goal() {
            return SearchReport {
                heuristic,
                outcome: SearchOutcome::Solved(root),
                nodes_expanded: 0,
                max_frontier_size: 1,
                elapsed: timer.elapsed(),
                tree,
            };
        }

        let mut frontier = Frontier::new();
        let mut explored: AHashSet<Board> = AHashSet::new();
        let mut nodes_expanded = 0;
        frontier.push(root, tree.get(root).f());

        let outcome = loop {
            frontier.observe_size();
            let Some(id) = frontier.pop() else {
                break SearchOutcome::Exhausted;
            };
            let node = *tree.get(id);

            if explored.contains(&node.board) {
                trace!("discarding stale entry at g={}", node.g);
                continue;
            }
            if let Some(limit) = self.max_expansions
                && nodes_expanded >= limit
            {
                break SearchOutcome::Aborted { limit };
            }

            explored.insert(node.board);
            nodes_expanded += 1;
            trace!(
                "expanding {:?}; g={}, h={}, f={}",
                node.board.tiles(),
                node.g,
                node.h,
                node.f()
            );

            if node.board.is_goal() {
                break SearchOutcome::Solved(id);
            }

            for (board, direction) in successors(&node.board) {
                if explored.contains(&board) {
                    continue;
                }
                let child = tree.insert_child(id, board, direction, heuristic.evaluate(&board));
                frontier.push(child, tree.get(child).f());
            }
        };

        let report = SearchReport {
            heuristic,
            outcome,
            nodes_expanded,
            max_frontier_size: frontier.high_water(),
            elapsed: timer.elapsed(),
            tree,
        };
        debug!(
            "search finished; algorithm: {heuristic}, outcome: {:?}, depth: {:?}, expanded: {}, max frontier: {}, generated: {}, left in frontier: {}, elapsed: {:?}",
            report.outcome,
            report.depth(),
            report.nodes_expanded,
            report.max_frontier_size,
            frontier.pushed(),
            frontier.len(),
            report.elapsed,
        );
        report
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped; the node is in the report's tree.
    Solved(NodeId),
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The expansion cap was reached first.
    Aborted { limit: usize },
}

/// Everything one search produced, including the node arena needed to walk
/// back from the goal.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub heuristic: Heuristic,
    pub outcome: SearchOutcome,
    pub nodes_expanded: usize,
    pub max_frontier_size: usize,
    pub elapsed: Duration,
    pub tree: SearchTree,
}

impl SearchReport {
    pub fn goal_id(&self) -> Option<NodeId> {
        match self.outcome {
            SearchOutcome::Solved(id) => Some(id),
            _ => None,
        }
    }

    pub fn goal(&self) -> Option<&SearchNode> {
        self.goal_id().map(|id| self.tree.get(id))
    }

    /// Solution length in moves.
    pub fn depth(&self) -> Option<u32> {
        self.goal().map(|node| node.g)
    }

    /// Boards from the initial state to the goal; empty without a goal.
    pub fn path(&self) -> Vec<Board> {
        reconstruct(&self.tree, self.goal_id())
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.goal_id()
            .map(|id| self.tree.directions(id))
            .unwrap_or_default()
    }

    pub fn into_solution(self) -> Result<Solution, SolveError> {
        let nodes_expanded = self.nodes_expanded;
        let goal = match self.outcome {
            SearchOutcome::Solved(id) => id,
            SearchOutcome::Exhausted => {
                return Err(SolveError::NoSolutionFound { nodes_expanded });
            }
            SearchOutcome::Aborted { limit } => {
                return Err(SolveError::SearchAborted {
                    limit,
                    nodes_expanded,
                });
            }
        };
        Ok(Solution {
            heuristic: self.heuristic,
            depth: self.tree.get(goal).g,
            path: reconstruct(&self.tree, Some(goal)),
            moves: self.tree.directions(goal),
            nodes_expanded,
            max_frontier_size: self.max_frontier_size,
            elapsed: self.elapsed,
        })
    }
}

/// A solved search, detached from its node arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub heuristic: Heuristic,
    pub depth: u32,
    /// Initial board first, goal last; `depth + 1` entries.
    pub path: Vec<Board>,
    /// Slides of the blank; `depth` entries.
    pub moves: Vec<Direction>,
    pub nodes_expanded: usize,
    pub max_frontier_size: usize,
    pub elapsed: Duration,
}

impl Solution {
    pub fn initial(&self) -> &Board {
        &self.path[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn board(tiles: [u8; CELLS]) -> Board {
        Board::new(tiles).unwrap()
    }

    fn stats(report: &SearchReport) -> (u32, usize, usize) {
        (
            report.depth().expect("solvable board must be solved"),
            report.nodes_expanded,
            report.max_frontier_size,
        )
    }

    fn assert_valid_path(initial: &Board, solution: &Solution) {
        let path = &solution.path;
        assert_eq!(path.len(), solution.depth as usize + 1);
        assert_eq!(solution.moves.len(), solution.depth as usize);
        assert_eq!(path.first(), Some(initial));
        assert!(path.last().unwrap().is_goal());
        for (pair, &direction) in path.windows(2).zip(&solution.moves) {
            assert!(successors(&pair[0]).contains(&(pair[1], direction)));
        }
    }

    fn scramble(rng: &mut StdRng, steps: usize) -> Board {
        let mut board = Board::GOAL;
        for _ in 0..steps {
            let moves = successors(&board);
            board = moves[rng.random_range(0..moves.len())].0;
        }
        board
    }

    #[test]
    fn test_initial_goal() {
        for heuristic in Heuristic::ALL {
            let report = search(Board::GOAL, heuristic);
            assert_eq!(stats(&report), (0, 0, 1));
            assert_eq!(report.path(), vec![Board::GOAL]);
            assert!(report.directions().is_empty());
        }
    }

    #[test]
    fn test_one_move() {
        let initial = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        for heuristic in Heuristic::ALL {
            let solution = Solver::new(heuristic).solve(initial).unwrap();
            assert_eq!(solution.depth, 1);
            assert_eq!(solution.moves, vec![Direction::Right]);
            assert_valid_path(&initial, &solution);
        }
    }

    #[test]
    fn test_two_moves() {
        let initial = board([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        for heuristic in Heuristic::ALL {
            let solution = Solver::new(heuristic).solve(initial).unwrap();
            assert_eq!(solution.depth, 2);
            assert_eq!(solution.moves, vec![Direction::Down, Direction::Right]);
            assert_valid_path(&initial, &solution);
        }
    }

    #[test]
    fn test_pinned_statistics() {
        #[rustfmt::skip]
        let cases: [([u8; CELLS], [(u32, usize, usize); 3]); 6] = [
            ([1, 2, 3, 4, 5, 6, 7, 8, 0], [(0, 0, 1), (0, 0, 1), (0, 0, 1)]),
            ([1, 2, 3, 4, 5, 6, 7, 0, 8], [(1, 4, 5), (1, 2, 3), (1, 2, 3)]),
            ([1, 2, 3, 4, 0, 6, 7, 5, 8], [(2, 9, 8), (2, 3, 5), (2, 3, 5)]),
            ([1, 2, 3, 5, 0, 6, 4, 7, 8], [(4, 33, 28), (4, 5, 6), (4, 5, 6)]),
            ([1, 3, 6, 5, 0, 2, 4, 7, 8], [(8, 311, 199), (8, 19, 16), (8, 13, 12)]),
            ([1, 3, 6, 5, 0, 7, 4, 8, 2], [(12, 2328, 1371), (12, 120, 88), (12, 37, 28)]),
        ];
        for (tiles, expected) in cases {
            for (heuristic, expected) in Heuristic::ALL.into_iter().zip(expected) {
                let report = search(board(tiles), heuristic);
                assert_eq!(stats(&report), expected, "{heuristic} on {tiles:?}");
            }
        }
    }

    #[test]
    fn test_efficiency_ordering() {
        for tiles in [
            [1, 2, 3, 4, 5, 6, 7, 0, 8],
            [1, 2, 3, 4, 5, 6, 0, 7, 8],
            [1, 3, 6, 5, 0, 2, 4, 7, 8],
            [1, 3, 6, 5, 0, 7, 4, 8, 2],
            [1, 6, 7, 5, 0, 3, 4, 8, 2],
        ] {
            let [ucs, misplaced, manhattan] =
                Heuristic::ALL.map(|heuristic| search(board(tiles), heuristic));
            assert!(manhattan.nodes_expanded <= misplaced.nodes_expanded);
            assert!(misplaced.nodes_expanded <= ucs.nodes_expanded);
            assert_eq!(ucs.depth(), misplaced.depth());
            assert_eq!(ucs.depth(), manhattan.depth());
        }
    }

    #[test]
    fn test_optimality_agreement_on_scrambles() {
        let mut rng = StdRng::seed_from_u64(170);
        for _ in 0..25 {
            let steps = rng.random_range(1..=14);
            let initial = scramble(&mut rng, steps);
            let solutions: Vec<Solution> = Heuristic::ALL
                .iter()
                .map(|&heuristic| Solver::new(heuristic).solve(initial).unwrap())
                .collect();
            for solution in &solutions {
                assert!(solution.depth as usize <= steps);
                assert_eq!(solution.depth, solutions[0].depth, "{initial:?}");
                assert_valid_path(&initial, solution);
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let initial = board([1, 6, 7, 5, 0, 3, 4, 8, 2]);
        for heuristic in Heuristic::ALL {
            let first = search(initial, heuristic);
            let second = search(initial, heuristic);
            assert_eq!(stats(&first), stats(&second));
            assert_eq!(first.path(), second.path());
        }
    }

    #[test]
    fn test_unsolvable_board_is_rejected() {
        let tiles = [1, 2, 3, 4, 5, 6, 8, 7, 0];
        for heuristic in Heuristic::ALL {
            assert_eq!(
                solve(&tiles, heuristic, None),
                Err(SolveError::Unsolvable { inversions: 1 })
            );
        }
    }

    #[test]
    fn test_malformed_board_is_rejected() {
        assert_eq!(
            solve(&[1, 2, 3, 4, 5, 6, 7, 7, 0], Heuristic::ManhattanDistance, None),
            Err(SolveError::InvalidBoard(BoardError::Duplicate { value: 7 }))
        );
        assert!(matches!(
            solve(&[1, 2, 3], Heuristic::Zero, None),
            Err(SolveError::InvalidBoard(BoardError::WrongLength { .. }))
        ));
    }

    #[test]
    fn test_unsolvable_search_exhausts_reachable_half() {
        let report = search(board([1, 2, 3, 4, 5, 6, 8, 7, 0]), Heuristic::ManhattanDistance);
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.nodes_expanded, 181_440);
        assert!(report.path().is_empty());
        assert_eq!(
            report.into_solution(),
            Err(SolveError::NoSolutionFound {
                nodes_expanded: 181_440
            })
        );
    }

    #[test]
    fn test_expansion_cap() {
        let tiles = [1, 3, 6, 5, 0, 2, 4, 7, 8];
        let report = Solver::new(Heuristic::Zero)
            .with_max_expansions(10)
            .search(board(tiles));
        assert_eq!(report.outcome, SearchOutcome::Aborted { limit: 10 });
        assert_eq!(report.nodes_expanded, 10);
        assert_eq!(report.depth(), None);

        assert_eq!(
            solve(&tiles, Heuristic::Zero, Some(10)),
            Err(SolveError::SearchAborted {
                limit: 10,
                nodes_expanded: 10
            })
        );

        // A cap equal to the uncapped expansion count still solves.
        let solution = solve(&tiles, Heuristic::ManhattanDistance, Some(13)).unwrap();
        assert_eq!(solution.depth, 8);
        assert_eq!(solution.nodes_expanded, 13);
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let initial = board([1, 3, 6, 5, 0, 7, 4, 8, 2]);
        let fresh = search(initial, Heuristic::MisplacedTiles);
        let _ = search(initial, Heuristic::Zero);
        let _ = search(board([1, 2, 3, 4, 0, 6, 7, 5, 8]), Heuristic::ManhattanDistance);
        let again = search(initial, Heuristic::MisplacedTiles);
        assert_eq!(stats(&fresh), stats(&again));
    }

    #[test]
    fn test_solution_carries_statistics() {
        let solution = solve(&[1, 3, 6, 5, 0, 2, 4, 7, 8], Heuristic::MisplacedTiles, None).unwrap();
        assert_eq!(solution.heuristic, Heuristic::MisplacedTiles);
        assert_eq!(solution.nodes_expanded, 19);
        assert_eq!(solution.max_frontier_size, 16);
        assert_eq!(solution.initial().tiles(), &[1, 3, 6, 5, 0, 2, 4, 7, 8]);
    }
}
