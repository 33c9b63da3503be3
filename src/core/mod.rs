//! Core engine types: tile keys and deterministic RNG.
//!
//! These are the fundamental building blocks shared by the bag and the
//! round controller. Randomness is always injected via `TileRng` so that
//! tests can supply fixed seeds and verify exact draw outcomes.

pub mod key;
pub mod rng;

pub use key::TileKey;
pub use rng::{TileRng, TileRngState};
