//! Spawner - drops one new tile into a random empty cell
//!
//! Consumes the injected randomness source; the core never reaches for a
//! process-wide generator, so a seeded rng replays the exact same game.

use rand::Rng;

use crate::core::board::Board;
use crate::core::matrix::empty_coords;
use crate::core::tile::Tile;
use crate::types::FOUR_TILE_CHANCE;

/// Place one new tile (2 at 90%, 4 at 10%) in a uniformly chosen empty
/// cell. A full board comes back unchanged; that is a defined outcome,
/// not an error.
pub fn spawn<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let coords = empty_coords(board);
    if coords.is_empty() {
        return board.clone();
    }

    let (x, y) = coords[rng.gen_range(0..coords.len())];
    let value = if rng.gen_bool(FOUR_TILE_CHANCE) { 4 } else { 2 };

    let mut spawned = board.clone();
    spawned.set(x, y, Tile::with_value(value, rng));
    spawned
}

/// Starting board: an empty grid with two tiles spawned into it
pub fn spawned_board<R: Rng>(size: usize, rng: &mut R) -> Board {
    let board = Board::empty(size, rng);
    let board = spawn(&board, rng);
    spawn(&board, rng)
}
