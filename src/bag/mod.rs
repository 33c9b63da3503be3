//! The letter bag: a weighted multiset of undrawn tiles.
//!
//! The bag is a **single owned aggregate**: the tile catalog, the
//! per-key remaining counts, and the working pool live behind one type
//! so no external code can desynchronize counts from the pool.
//!
//! ## Key Types
//!
//! - `TileBag`: catalog + counts + pool, with uniform random draws
//! - `Tile` / `TileKey`: definitions (from `tiles`)

pub mod tile_bag;

pub use tile_bag::TileBag;
