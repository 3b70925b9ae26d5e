//! Core module - pure game rules with no I/O
//!
//! Everything in here is a total, synchronous function over immutable
//! inputs: boards and states are never mutated once handed to a caller.

pub mod board;
pub mod game_state;
pub mod matrix;
pub mod resolve;
pub mod scoring;
pub mod snapshot;
pub mod spawn;
pub mod tile;

// Re-export commonly used items
pub use board::Board;
pub use game_state::GameState;
pub use resolve::{can_move, is_immobile, movable_directions, resolve};
pub use scoring::board_score;
pub use snapshot::GameSnapshot;
pub use spawn::{spawn, spawned_board};
pub use tile::{Tile, TileKey};
