//! Tile key identification.
//!
//! Every tile type is identified by a single character. The space
//! character is reserved for the blank (wildcard) tile.
//!
//! ## Usage
//!
//! ```
//! use tilebag::core::TileKey;
//!
//! let e = TileKey::new('E');
//! let blank = TileKey::BLANK;
//!
//! assert!(!e.is_blank());
//! assert!(blank.is_blank());
//! ```

use serde::{Deserialize, Serialize};

/// Single-character identity of a tile type.
///
/// Many bag slots reference the same key; the bag's catalog maps each
/// key to its one `Tile` definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileKey(pub char);

impl TileKey {
    /// The blank (wildcard) tile key.
    pub const BLANK: TileKey = TileKey(' ');

    /// Create a new tile key.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Get the raw character.
    #[must_use]
    pub const fn raw(self) -> char {
        self.0
    }

    /// Check whether this key is the blank tile.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == ' '
    }
}

impl From<char> for TileKey {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl std::fmt::Display for TileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
