//! Tile definitions - static letter data.
//!
//! `Tile` holds the immutable properties of a tile type: its key, its
//! human-readable label, and its point value. The blank tile has a
//! space key, the label "Blank", and value 0.
//!
//! Runtime state (how many copies remain in the bag, which copies sit
//! in the hand) lives in `TileBag` and `Round`, never here.

use serde::{Deserialize, Serialize};

use crate::core::key::TileKey;

/// Static tile definition.
///
/// Defined once at bag construction and never mutated; many bag slots
/// reference the same definition by key.
///
/// ## Example
///
/// ```
/// use tilebag::tiles::{Tile, TileKey};
///
/// let q = Tile::new(TileKey::new('Q'), "Q", 10);
/// assert_eq!(q.point_value, 10);
///
/// let blank = Tile::blank();
/// assert_eq!(blank.display_name, "Blank");
/// assert_eq!(blank.point_value, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Single-character identity; unique within a bag's catalog.
    pub key: TileKey,
    /// Human-readable label. Equals the key for letters; the blank
    /// displays as "Blank" but renders as the blank glyph.
    pub display_name: String,
    /// Non-negative score weight. Blanks carry value 0.
    pub point_value: u32,
}

impl Tile {
    /// Create a new tile definition.
    #[must_use]
    pub fn new(key: TileKey, display_name: impl Into<String>, point_value: u32) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            point_value,
        }
    }

    /// Create a letter tile whose label equals its key.
    #[must_use]
    pub fn letter(c: char, point_value: u32) -> Self {
        Self::new(TileKey::new(c), c.to_string(), point_value)
    }

    /// Create the blank (wildcard) tile.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(TileKey::BLANK, "Blank", 0)
    }

    /// Check whether this is the blank tile.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.is_blank()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The blank renders as its glyph, not its label
        write!(f, "{}", self.key)
    }
}
