//! Round configuration.
//!
//! Configuration over convention: hand size and resource allowances
//! are set at round start, not hardcoded into the controller.

use serde::{Deserialize, Serialize};

/// Configuration for a round.
///
/// ## Example
///
/// ```
/// use tilebag::round::RoundConfig;
///
/// let config = RoundConfig::new()
///     .hand_size(5)
///     .starting_discards(2);
///
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.starting_attempts, 4);
/// assert_eq!(config.starting_discards, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of tiles drawn into the hand at round start.
    pub hand_size: usize,
    /// Play attempts available per round.
    pub starting_attempts: u32,
    /// Discard-and-redraw actions available per round.
    pub starting_discards: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            starting_attempts: 4,
            starting_discards: 4,
        }
    }
}

impl RoundConfig {
    /// Create a config with the default values (hand 7, 4 attempts,
    /// 4 discards).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of play attempts per round.
    #[must_use]
    pub fn starting_attempts(mut self, attempts: u32) -> Self {
        self.starting_attempts = attempts;
        self
    }

    /// Set the number of discards per round.
    #[must_use]
    pub fn starting_discards(mut self, discards: u32) -> Self {
        self.starting_discards = discards;
        self
    }
}
