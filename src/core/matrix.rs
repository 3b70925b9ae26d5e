//! Matrix ops - grid transform primitives
//!
//! Board-size-agnostic helpers the resolver and spawner build on. Every
//! transform returns a new board; the input is never mutated. The two
//! reversal transforms are involutions: applied twice they give back the
//! original board, which is how the resolver normalizes and un-normalizes
//! a direction with the same call.

use crate::core::board::Board;
use crate::core::tile::Tile;

/// Apply `f(tile, x, y)` to every cell, producing a new board of the same
/// shape. Traversal is row-major, column within row.
pub fn map_cells(board: &Board, mut f: impl FnMut(&Tile, usize, usize) -> Tile) -> Board {
    let size = board.size();
    let mut cells = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            cells.push(f(board.get(x, y), x, y));
        }
    }
    Board::from_parts(size, cells)
}

/// Same traversal order as `map_cells`, for side effects only
pub fn for_each_cell(board: &Board, mut f: impl FnMut(&Tile, usize, usize)) {
    let size = board.size();
    for y in 0..size {
        for x in 0..size {
            f(board.get(x, y), x, y);
        }
    }
}

/// Coordinates of every empty cell, in row-major order
pub fn empty_coords(board: &Board) -> Vec<(usize, usize)> {
    let mut coords = Vec::new();
    for_each_cell(board, |tile, x, y| {
        if tile.is_empty() {
            coords.push((x, y));
        }
    });
    coords
}

/// New board with the order of the rows reversed.
/// Turns a DOWN move into an UP-equivalent sweep.
pub fn reversed_rows(board: &Board) -> Board {
    let size = board.size();
    map_cells(board, |_, x, y| *board.get(x, size - 1 - y))
}

/// New board with each row reversed in place.
/// Turns a RIGHT move into a LEFT-equivalent sweep.
pub fn reversed_in_rows(board: &Board) -> Board {
    let size = board.size();
    map_cells(board, |_, x, y| *board.get(size - 1 - x, y))
}
