use super::*;

/// Pairs of non-blank tiles that appear in the opposite order to the goal.
pub fn count_inversions(tiles: &[u8; CELLS]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < tile)
                .count()
        })
        .sum()
}

/// On a 3x3 board, a configuration reaches the goal iff its inversion count is
/// even. `tiles` must already be a permutation of `0..=8`.
pub fn is_solvable(tiles: &[u8; CELLS]) -> bool {
    count_inversions(tiles) % 2 == 0
}
