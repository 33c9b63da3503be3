//! The standard English tile set.
//!
//! 27 symbols (26 letters plus the blank), 100 tiles total, with the
//! conventional word-game distribution and point values.

use super::tile::Tile;

/// Total number of tiles in a freshly seeded standard bag.
pub const STANDARD_TILE_TOTAL: u32 = 100;

/// (letter, count, point value) for the 26 letters; the blank is
/// appended separately with count 2 and value 0.
const LETTERS: [(char, u32, u32); 26] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
];

/// The standard set as (definition, count) pairs, ready to seed a bag.
///
/// ```
/// use tilebag::tiles::standard_tiles;
///
/// let set = standard_tiles();
/// assert_eq!(set.len(), 27);
/// assert_eq!(set.iter().map(|(_, n)| n).sum::<u32>(), 100);
/// ```
#[must_use]
pub fn standard_tiles() -> Vec<(Tile, u32)> {
    let mut tiles: Vec<(Tile, u32)> = LETTERS
        .iter()
        .map(|&(c, count, value)| (Tile::letter(c, value), count))
        .collect();
    tiles.push((Tile::blank(), 2));
    tiles
}
