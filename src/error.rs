//! Error types for bag and round operations.

use thiserror::Error;

use crate::core::key::TileKey;

/// Main error type for bag and round operations.
///
/// Bulk draws deliberately never fail on under-supply: `draw_many`
/// returns fewer tiles than requested rather than erroring, so there
/// is no variant for it here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// Count adjustment referenced a key never registered in the
    /// catalog. Indicates a corrupted catalog; treat as fatal.
    #[error("unknown tile key '{0}'")]
    UnknownTile(TileKey),

    /// Negative count adjustment exceeding the remaining count.
    /// Refused with no mutation; counts never go negative.
    #[error("cannot remove {requested} of tile '{key}', only {available} remaining")]
    InvalidAdjustment {
        key: TileKey,
        requested: u32,
        available: u32,
    },

    /// Single draw attempted against an empty pool. Recoverable:
    /// check `remaining()` first, or catch and no-op.
    #[error("cannot draw from an empty bag")]
    EmptyBag,

    /// Discard requested with no discards left this round.
    #[error("no discards remaining this round")]
    NoDiscardsRemaining,

    /// Play attempt recorded with no attempts left this round.
    #[error("no attempts remaining this round")]
    NoAttemptsRemaining,

    /// Discard index outside the current hand.
    #[error("hand index {index} out of bounds for hand of size {hand_size}")]
    HandIndexOutOfBounds { index: usize, hand_size: usize },
}

/// Result type alias for bag and round operations.
pub type BagResult<T> = Result<T, BagError>;
