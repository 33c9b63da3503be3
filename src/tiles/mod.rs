//! Tile definitions: the immutable letter values and the standard set.
//!
//! ## Key Types
//!
//! - `TileKey`: Single-character identity (from `core::key`)
//! - `Tile`: Immutable (key, display name, point value) triple
//! - `standard_tiles()`: The 27-symbol English distribution used to
//!   seed a standard bag

pub mod standard;
pub mod tile;

pub use standard::{standard_tiles, STANDARD_TILE_TOTAL};
pub use tile::Tile;

// Re-export the key type from core for convenience
pub use crate::core::key::TileKey;
