//! Round/hand controller: the player-facing surface of the engine.
//!
//! A `Round` owns the bag, the player's hand, and the two depleting
//! per-round resources (attempts and discards). The presentation layer
//! calls only this module and renders whatever it reads back; the
//! `Round` is in turn the sole caller into the `TileBag`.
//!
//! ## Key Types
//!
//! - `RoundConfig`: hand size and starting resource counts
//! - `Round`: the controller itself

pub mod config;
pub mod controller;

pub use config::RoundConfig;
pub use controller::Round;
