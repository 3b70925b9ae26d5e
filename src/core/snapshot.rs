//! Snapshot - the plain-values view handed across the crate boundary
//!
//! External persistence and presentation layers consume this shape; it is
//! the serde surface of the crate. `values` round-trips through
//! `Board::from_values`, so a saved snapshot can seed a restored game.

use serde::{Deserialize, Serialize};

use crate::types::DirectionMoves;

/// Serializable view of one game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Plain value grid, row-major, 0 = empty
    pub values: Vec<Vec<u32>>,
    pub moves: u32,
    pub score: u32,
    pub score_earned: u32,
    pub game_over: bool,
    pub can_move: DirectionMoves,
}
