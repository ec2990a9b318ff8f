use super::*;

use smallvec::SmallVec;
use std::fmt;

/// The direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// At most four successors; a corner blank has two, an edge blank three.
pub type Successors = SmallVec<[(Board, Direction); 4]>;

impl Direction {
    /// Expansion order. Fixed so expansion counts are reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of the blank.
    #[inline]
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn short(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{s}")
    }
}

/// Every board reachable from `board` by one legal slide, in [`Direction::ALL`]
/// order. `board` itself is left untouched.
pub fn successors(board: &Board) -> Successors {
    Direction::ALL
        .iter()
        .filter_map(|&direction| board.slide(direction).map(|next| (next, direction)))
        .collect()
}

/// Compact move listing: runs of the same direction are collapsed, e.g.
/// `R R U` becomes `2R U`, wrapped at ten entries per line.
pub fn format_directions(directions: &[Direction]) -> String {
    let mut list = vec![];
    let mut i = 0;
    while i < directions.len() {
        let direction = directions[i];
        let mut count = 1;
        while i + count < directions.len() && directions[i + count] == direction {
            count += 1;
        }
        let str = if count == 1 {
            direction.short().to_string()
        } else {
            format!("{count}{}", direction.short())
        };
        list.push(str);
        i += count;
    }

    let mut output = String::new();
    let max_width = list.iter().map(|s| s.len()).max().unwrap_or_default() + 1;
    for chunk in list.chunks(10) {
        for cmd in chunk {
            output.push_str(&format!("{cmd:<width$}", width = max_width));
        }
        output.push('\n');
    }

    output
}
