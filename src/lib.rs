//! # tilebag
//!
//! Letter-supply and hand-management engine for tile-drawing word games.
//!
//! ## Design Principles
//!
//! 1. **One owned aggregate**: the bag's catalog, per-key counts, and
//!    working pool live behind `TileBag`; no external code can
//!    desynchronize counts from the pool.
//!
//! 2. **Injectable randomness**: every shuffle and draw flows through a
//!    seedable `TileRng`, so tests can replay exact draw sequences.
//!
//! 3. **Configuration over convention**: hand size and per-round
//!    resource allowances come from `RoundConfig`, not constants.
//!
//! ## Architecture
//!
//! The `Round` controller is the only caller into the `TileBag`; a
//! presentation layer calls only the `Round` and renders what it reads
//! back. Draws are uniform and without replacement: the pool is
//! Fisher-Yates shuffled before every draw, so taking from the end is
//! a uniform random choice.
//!
//! ## Modules
//!
//! - `core`: Tile keys and deterministic RNG
//! - `tiles`: Immutable tile definitions and the standard 100-tile set
//! - `bag`: The letter bag (catalog + counts + pool)
//! - `round`: Round/hand controller and its configuration
//! - `error`: Typed errors for every fallible operation
//!
//! ## Example
//!
//! ```
//! use tilebag::{Round, RoundConfig, TileRng};
//!
//! let mut round = Round::start(RoundConfig::default(), TileRng::new(42));
//!
//! assert_eq!(round.hand().len(), 7);
//! assert_eq!(round.remaining_tiles(), 93);
//!
//! round.shuffle_hand();
//! round.discard_and_redraw(&[0, 1]).unwrap();
//! round.record_attempt().unwrap();
//!
//! assert_eq!(round.attempts_remaining(), 3);
//! assert_eq!(round.discards_remaining(), 3);
//! ```

pub mod bag;
pub mod core;
pub mod error;
pub mod round;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{TileKey, TileRng, TileRngState};

pub use crate::bag::TileBag;

pub use crate::error::{BagError, BagResult};

pub use crate::round::{Round, RoundConfig};

pub use crate::tiles::{standard_tiles, Tile, STANDARD_TILE_TOTAL};
