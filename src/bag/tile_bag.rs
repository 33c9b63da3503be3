//! Tile bag: uniform random draws without replacement over a multiset.
//!
//! The pool is a flat list of keys, one entry per remaining tile.
//! Every draw shuffles the pool with an unbiased Fisher-Yates
//! permutation and takes from the end, which is equivalent to a
//! uniform random choice. Counts and pool are only ever mutated
//! together, through `adjust_count`.

use rustc_hash::FxHashMap;

use crate::core::key::TileKey;
use crate::core::rng::TileRng;
use crate::error::{BagError, BagResult};
use crate::tiles::standard::standard_tiles;
use crate::tiles::tile::Tile;

/// A finite, weighted multiset of letter tiles supporting uniform
/// random draws without replacement.
///
/// Invariant: for every key, `count_of(key)` equals the number of
/// occurrences of that key in the working pool, and counts never go
/// negative.
///
/// Randomness is injected per call, so the owner of the `TileRng`
/// (normally a `Round`) controls determinism.
///
/// ## Example
///
/// ```
/// use tilebag::bag::TileBag;
/// use tilebag::core::{TileKey, TileRng};
///
/// let mut rng = TileRng::new(42);
/// let mut bag = TileBag::standard();
/// assert_eq!(bag.remaining(), 100);
/// assert_eq!(bag.count_of(TileKey::new('E')), 12);
///
/// let hand = bag.draw_many(7, &mut rng);
/// assert_eq!(hand.len(), 7);
/// assert_eq!(bag.remaining(), 93);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileBag {
    /// Tile definitions by key. Fixed after construction.
    catalog: FxHashMap<TileKey, Tile>,
    /// Remaining count per key. Mirrors the pool exactly.
    counts: FxHashMap<TileKey, u32>,
    /// One entry per remaining tile. Order is meaningless between
    /// shuffles.
    pool: Vec<TileKey>,
}

impl TileBag {
    /// Create an empty bag with no registered tiles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag seeded with the standard 100-tile English set.
    #[must_use]
    pub fn standard() -> Self {
        let mut bag = Self::new();
        for (tile, count) in standard_tiles() {
            bag.add_tile(tile, count);
        }
        bag
    }

    /// Register a tile definition and add `count` copies to the bag.
    ///
    /// Calling again with the same key replaces the definition and
    /// adds `count` more copies.
    pub fn add_tile(&mut self, tile: Tile, count: u32) {
        let key = tile.key;
        self.counts.entry(key).or_insert(0);
        self.catalog.insert(key, tile);
        // Key is registered above, so this cannot fail
        let _ = self.adjust_count(key, count as i32);
    }

    /// Adjust the remaining count of a registered key by `step`.
    ///
    /// This is the sole primitive that mutates counts: positive steps
    /// add pool occurrences, negative steps remove them, and both
    /// sides move together so the count/pool invariant holds after
    /// every call.
    ///
    /// Fails with `UnknownTile` if the key was never registered, and
    /// with `InvalidAdjustment` if a negative step exceeds the
    /// remaining count. Failed calls mutate nothing.
    pub fn adjust_count(&mut self, key: TileKey, step: i32) -> BagResult<()> {
        let count = self
            .counts
            .get_mut(&key)
            .ok_or(BagError::UnknownTile(key))?;

        if step >= 0 {
            let step = step as u32;
            *count += step;
            for _ in 0..step {
                self.pool.push(key);
            }
            return Ok(());
        }

        let remove = step.unsigned_abs();
        if remove > *count {
            return Err(BagError::InvalidAdjustment {
                key,
                requested: remove,
                available: *count,
            });
        }

        *count -= remove;
        for _ in 0..remove {
            // Occurrences of one key are indistinguishable; removing
            // the last one found keeps the multiset exact. swap_remove
            // disturbs order, which the pre-draw shuffle erases.
            let pos = self
                .pool
                .iter()
                .rposition(|&k| k == key)
                .expect("pool out of sync with counts");
            self.pool.swap_remove(pos);
        }
        Ok(())
    }

    /// Get the tile definition for a key, if registered.
    #[must_use]
    pub fn get_tile(&self, key: TileKey) -> Option<&Tile> {
        self.catalog.get(&key)
    }

    /// Get the remaining count for a key. Unregistered keys read 0.
    #[must_use]
    pub fn count_of(&self, key: TileKey) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Get the total number of tiles remaining in the bag.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Check if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Shuffle the working pool in place with a uniform permutation.
    pub fn shuffle(&mut self, rng: &mut TileRng) {
        rng.shuffle(&mut self.pool);
    }

    /// Draw one tile uniformly at random, without replacement.
    ///
    /// Fails with `EmptyBag` if no tiles remain.
    pub fn draw_one(&mut self, rng: &mut TileRng) -> BagResult<Tile> {
        self.shuffle(rng);
        let key = *self.pool.last().ok_or(BagError::EmptyBag)?;
        self.adjust_count(key, -1)?;
        Ok(self.catalog[&key].clone())
    }

    /// Draw up to `n` tiles uniformly at random, without replacement.
    ///
    /// Shuffles once and takes a prefix, which matches `n` sequential
    /// uniform draws in distribution. If fewer than `n` tiles remain,
    /// returns what is available; under-supply is not an error.
    pub fn draw_many(&mut self, n: usize, rng: &mut TileRng) -> Vec<Tile> {
        self.shuffle(rng);
        let take = n.min(self.pool.len());
        let keys: Vec<TileKey> = self.pool[self.pool.len() - take..].to_vec();

        let mut tiles = Vec::with_capacity(take);
        for key in keys {
            // Keys were just read from the pool, so this cannot fail
            let _ = self.adjust_count(key, -1);
            tiles.push(self.catalog[&key].clone());
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tile_bag() -> TileBag {
        let mut bag = TileBag::new();
        bag.add_tile(Tile::letter('A', 1), 1);
        bag.add_tile(Tile::letter('B', 3), 1);
        bag
    }

    #[test]
    fn test_standard_seeding() {
        let bag = TileBag::standard();
        assert_eq!(bag.remaining(), 100);
        assert_eq!(bag.count_of(TileKey::new('E')), 12);
        assert_eq!(bag.count_of(TileKey::new('Q')), 1);
        assert_eq!(bag.count_of(TileKey::BLANK), 2);
    }

    #[test]
    fn test_add_tile_grows_pool() {
        let mut bag = TileBag::new();
        bag.add_tile(Tile::letter('A', 1), 3);
        assert_eq!(bag.remaining(), 3);
        assert_eq!(bag.count_of(TileKey::new('A')), 3);
    }

    #[test]
    fn test_adjust_count_unknown_key() {
        let mut bag = TileBag::new();
        let result = bag.adjust_count(TileKey::new('A'), 1);
        assert_eq!(result, Err(BagError::UnknownTile(TileKey::new('A'))));
    }

    #[test]
    fn test_adjust_count_below_zero_refused() {
        let mut bag = TileBag::new();
        bag.add_tile(Tile::letter('A', 1), 2);

        let result = bag.adjust_count(TileKey::new('A'), -3);
        assert_eq!(
            result,
            Err(BagError::InvalidAdjustment {
                key: TileKey::new('A'),
                requested: 3,
                available: 2,
            })
        );

        // Refused call mutated nothing
        assert_eq!(bag.count_of(TileKey::new('A')), 2);
        assert_eq!(bag.remaining(), 2);
    }

    #[test]
    fn test_get_tile() {
        let bag = TileBag::standard();
        let q = bag.get_tile(TileKey::new('Q')).unwrap();
        assert_eq!(q.point_value, 10);
        assert!(bag.get_tile(TileKey::new('é')).is_none());

        // Idempotent read
        assert_eq!(
            bag.get_tile(TileKey::new('Q')),
            bag.get_tile(TileKey::new('Q')),
        );
    }

    #[test]
    fn test_draw_one() {
        let mut rng = TileRng::new(42);
        let mut bag = two_tile_bag();
        let tile = bag.draw_one(&mut rng).unwrap();
        assert!(tile.key == TileKey::new('A') || tile.key == TileKey::new('B'));
        assert_eq!(bag.remaining(), 1);
        assert_eq!(bag.count_of(tile.key), 0);
    }

    #[test]
    fn test_draw_one_empty_bag() {
        let mut rng = TileRng::new(0);
        let mut bag = TileBag::new();
        assert_eq!(bag.draw_one(&mut rng), Err(BagError::EmptyBag));
    }

    #[test]
    fn test_draw_one_uniform() {
        // Over many seeds, each of {A, B} should come up near 50%
        let mut a_count = 0;
        for seed in 0..2000 {
            let mut rng = TileRng::new(seed);
            let mut bag = two_tile_bag();
            if bag.draw_one(&mut rng).unwrap().key == TileKey::new('A') {
                a_count += 1;
            }
        }
        assert!((900..=1100).contains(&a_count), "a_count = {}", a_count);
    }

    #[test]
    fn test_draw_many_conservation() {
        let mut rng = TileRng::new(42);
        let mut bag = TileBag::standard();
        let before = bag.remaining();
        let drawn = bag.draw_many(7, &mut rng);
        assert_eq!(drawn.len(), 7);
        assert_eq!(bag.remaining(), before - 7);
    }

    #[test]
    fn test_draw_many_under_supply() {
        let mut rng = TileRng::new(42);
        let mut bag = TileBag::new();
        bag.add_tile(Tile::letter('A', 1), 3);

        // Asking for more than remains is not an error
        let drawn = bag.draw_many(10, &mut rng);
        assert_eq!(drawn.len(), 3);
        assert_eq!(bag.remaining(), 0);
    }

    #[test]
    fn test_draw_many_zero() {
        let mut rng = TileRng::new(42);
        let mut bag = TileBag::standard();
        assert!(bag.draw_many(0, &mut rng).is_empty());
        assert_eq!(bag.remaining(), 100);
    }

    #[test]
    fn test_draw_many_from_empty() {
        let mut rng = TileRng::new(42);
        let mut bag = TileBag::new();
        assert!(bag.draw_many(5, &mut rng).is_empty());
    }

    #[test]
    fn test_draw_is_deterministic_per_seed() {
        let draw = |seed| {
            let mut rng = TileRng::new(seed);
            let mut bag = TileBag::standard();
            bag.draw_many(7, &mut rng)
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn test_counts_mirror_pool_after_draws() {
        let mut rng = TileRng::new(9);
        let mut bag = TileBag::standard();
        bag.draw_many(30, &mut rng);
        for _ in 0..10 {
            bag.draw_one(&mut rng).unwrap();
        }

        let total: u32 = standard_tiles()
            .iter()
            .map(|(tile, _)| bag.count_of(tile.key))
            .sum();
        assert_eq!(total as usize, bag.remaining());
        assert_eq!(bag.remaining(), 60);
    }

    #[test]
    fn test_drain_entire_bag() {
        let mut rng = TileRng::new(5);
        let mut bag = TileBag::standard();
        let mut e_count = 0;
        while !bag.is_empty() {
            if bag.draw_one(&mut rng).unwrap().key == TileKey::new('E') {
                e_count += 1;
            }
        }
        assert_eq!(e_count, 12);
        assert_eq!(bag.draw_one(&mut rng), Err(BagError::EmptyBag));
    }
}
