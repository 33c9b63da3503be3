//! The round controller: hand, bag, and per-round resources.
//!
//! All mutation goes through `&mut self` methods; a failed operation
//! leaves the hand, the bag, and the counters untouched. Discard
//! validation runs in full before any tile moves, so a bad index or an
//! exhausted counter cannot leave the hand half-edited.

use smallvec::SmallVec;

use crate::bag::TileBag;
use crate::core::rng::TileRng;
use crate::error::{BagError, BagResult};
use crate::round::config::RoundConfig;
use crate::tiles::tile::Tile;

/// Hands rarely exceed 8 tiles, so keep them inline.
type Hand = SmallVec<[Tile; 8]>;

/// One play session: a fresh standard bag, a drawn hand, and finite
/// attempt and discard allowances.
///
/// The round is the sole caller into the bag. Terminal condition
/// (`attempts_remaining == 0`) is observable via `is_over`, but
/// enforcing round termination is the host's responsibility; the
/// controller only refuses further decrements once a counter hits
/// zero.
///
/// ## Example
///
/// ```
/// use tilebag::round::{Round, RoundConfig};
/// use tilebag::core::TileRng;
///
/// let mut round = Round::start(RoundConfig::default(), TileRng::new(42));
/// assert_eq!(round.hand().len(), 7);
/// assert_eq!(round.remaining_tiles(), 93);
///
/// round.discard_and_redraw(&[0, 1]).unwrap();
/// assert_eq!(round.hand().len(), 7);
/// assert_eq!(round.discards_remaining(), 3);
/// assert_eq!(round.remaining_tiles(), 91);
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    bag: TileBag,
    hand: Hand,
    attempts_remaining: u32,
    discards_remaining: u32,
    rng: TileRng,
}

impl Round {
    /// Start a round: build a standard bag, draw the opening hand,
    /// and reset both counters to their configured maxima.
    #[must_use]
    pub fn start(config: RoundConfig, rng: TileRng) -> Self {
        let mut round = Self {
            config,
            bag: TileBag::new(),
            hand: Hand::new(),
            attempts_remaining: 0,
            discards_remaining: 0,
            rng,
        };
        round.restart();
        round
    }

    /// Restart the round in place: a fresh bag and hand, counters back
    /// to their maxima. No state carries over except the RNG stream.
    pub fn restart(&mut self) {
        self.bag = TileBag::standard();
        self.hand = self.bag.draw_many(self.config.hand_size, &mut self.rng).into();
        self.attempts_remaining = self.config.starting_attempts;
        self.discards_remaining = self.config.starting_discards;
    }

    /// Reorder the hand uniformly at random, in place.
    ///
    /// Pure presentation-order change; the bag and counters are
    /// untouched.
    pub fn shuffle_hand(&mut self) {
        self.rng.shuffle(&mut self.hand);
    }

    /// Discard the tiles at the given hand positions and draw
    /// replacements from the bag, appending them to the hand.
    ///
    /// Duplicate indices collapse to a single removal. Discarded
    /// tiles are gone for the round; they do not return to the bag.
    /// If the bag runs short, the hand simply ends up smaller.
    ///
    /// Fails with `NoDiscardsRemaining` if the discard allowance is
    /// spent, and with `HandIndexOutOfBounds` on a bad index. Failed
    /// calls mutate nothing.
    pub fn discard_and_redraw(&mut self, indices: &[usize]) -> BagResult<()> {
        if self.discards_remaining == 0 {
            return Err(BagError::NoDiscardsRemaining);
        }
        for &index in indices {
            if index >= self.hand.len() {
                return Err(BagError::HandIndexOutOfBounds {
                    index,
                    hand_size: self.hand.len(),
                });
            }
        }

        let mut to_remove: Vec<usize> = indices.to_vec();
        to_remove.sort_unstable();
        to_remove.dedup();

        // Remove back-to-front so earlier indices stay valid
        for &index in to_remove.iter().rev() {
            self.hand.remove(index);
        }

        let drawn = self.bag.draw_many(to_remove.len(), &mut self.rng);
        self.hand.extend(drawn);

        self.discards_remaining -= 1;
        Ok(())
    }

    /// Record a play attempt, spending one from the allowance.
    ///
    /// Fails with `NoAttemptsRemaining` once the allowance is spent.
    pub fn record_attempt(&mut self) -> BagResult<()> {
        if self.attempts_remaining == 0 {
            return Err(BagError::NoAttemptsRemaining);
        }
        self.attempts_remaining -= 1;
        Ok(())
    }

    /// The current hand, in player-visible order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Number of tiles left in the bag.
    #[must_use]
    pub fn remaining_tiles(&self) -> usize {
        self.bag.remaining()
    }

    /// Play attempts left this round.
    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Discards left this round.
    #[must_use]
    pub fn discards_remaining(&self) -> u32 {
        self.discards_remaining
    }

    /// Whether the round has reached its terminal condition.
    ///
    /// Observability only; the host decides what ending a round means.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.attempts_remaining == 0
    }

    /// The configuration this round was started with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Read access to the bag, for status display.
    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }
}
