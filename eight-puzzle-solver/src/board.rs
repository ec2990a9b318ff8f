use super::*;

use crate::move_::Direction;

use std::fmt;

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

const BLANK: u8 = 0;
const BLANK_CHAR: char = '*';

/// An immutable 3x3 tile configuration, row-major, with `0` as the blank.
///
/// The blank index is derived from the tiles at construction, so equality and
/// hashing are effectively over the tile sequence alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    pub const GOAL: Board = Board {
        tiles: GOAL,
        blank: (CELLS - 1) as u8,
    };

    /// Build a board, rejecting anything that is not a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;
        for (position, &value) in tiles.iter().enumerate() {
            if value as usize >= CELLS {
                return Err(BoardError::OutOfRange { value, position });
            }
            if seen[value as usize] {
                return Err(BoardError::Duplicate { value });
            }
            seen[value as usize] = true;
            if value == BLANK {
                blank = position as u8;
            }
        }
        Ok(Self { tiles, blank })
    }

    pub fn from_slice(tiles: &[u8]) -> Result<Self, BoardError> {
        let tiles: [u8; CELLS] = tiles.try_into().map_err(|_| BoardError::WrongLength {
            expected: CELLS,
            got: tiles.len(),
        })?;
        Self::new(tiles)
    }

    /// Parse nine tiles from free-form text.
    ///
    /// Every digit is one tile and `*` stands for the blank. Whitespace, commas
    /// and semicolons are separators, so `1,2,3,4,5,6,7,8,0`, `123456780` and
    /// the three-row grid printed by [`Board::to_pretty_string`] all parse.
    pub fn parse(content: &str) -> Result<Self, BoardError> {
        let mut tiles = Vec::with_capacity(CELLS);
        for c in content.chars() {
            if c.is_whitespace() || c == ',' || c == ';' {
                continue;
            }
            let value = match c {
                BLANK_CHAR => BLANK,
                '0'..='9' => c as u8 - b'0',
                _ => {
                    return Err(BoardError::InvalidToken {
                        token: c.to_string(),
                    });
                }
            };
            tiles.push(value);
        }
        Self::from_slice(&tiles)
    }

    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    #[inline]
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Tile at `(row, col)`, `0` for the blank.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIDE + col]
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL
    }

    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.tiles)
    }

    /// Slide the blank one cell in `direction`, swapping it with the tile
    /// there. Returns `None` when that cell is off the grid.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let (d_row, d_col) = direction.offset();
        let row = row.checked_add_signed(d_row).filter(|&r| r < SIDE)?;
        let col = col.checked_add_signed(d_col).filter(|&c| c < SIDE)?;
        let target = row * SIDE + col;

        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(Self {
            tiles,
            blank: target as u8,
        })
    }

    pub fn to_pretty_string(&self) -> String {
        let mut output = String::new();
        for (i, row) in self.tiles.chunks(SIDE).enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    BLANK => BLANK_CHAR.to_string(),
                    _ => tile.to_string(),
                })
                .collect();
            output.push_str(&cells.join(" "));
        }
        output
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = BoardError;

    fn try_from(tiles: [u8; CELLS]) -> Result<Self, Self::Error> {
        Self::new(tiles)
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pretty_string())
    }
}
