//! Scoring module - board score from per-tile merge history
//!
//! There is no running total kept anywhere: each tile carries the points
//! from every merge it has participated in, and the board score is the sum
//! of those. Recomputing from tile state is what lets a transition compare
//! before/after snapshots safely.

use crate::core::board::Board;

/// Total score of a board: the sum of every tile's accumulated score
pub fn board_score(board: &Board) -> u32 {
    board.tiles().iter().map(|tile| tile.score).sum()
}
