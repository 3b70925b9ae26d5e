//! Sliding-tile merge puzzle (2048-style) rules engine.
//!
//! This crate owns the board representation, the deterministic
//! move/merge/spawn algorithm, score accumulation, and game-over detection.
//! Rendering, input capture, and persistence live outside; callers consume
//! immutable [`core::GameState`] snapshots and feed one [`types::Direction`]
//! at a time back in.
//!
//! Randomness (spawn placement, spawn value, tile identity keys) is always
//! injected through `rand::Rng`, so a caller that seeds the generator gets a
//! fully reproducible game.

pub mod core;
pub mod types;
