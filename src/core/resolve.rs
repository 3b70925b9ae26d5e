//! Move resolver - the slide/merge sweep at the heart of the game
//!
//! All four directions are normalized into one canonical sweep that moves
//! tiles toward the low edge of an axis: RIGHT reverses each row, DOWN
//! reverses the row order, LEFT and UP pass through unchanged. The same
//! transform is its own inverse, so reapplying it after the sweep restores
//! the caller's orientation.
//!
//! Merge locks live in a side table scoped to one `resolve` call; the
//! `Tile` type handed back to callers never carries them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::board::Board;
use crate::core::matrix::{reversed_in_rows, reversed_rows};
use crate::core::tile::Tile;
use crate::types::{Direction, DirectionMoves};

/// Axis the canonical sweep walks: tiles move toward x = 0 or y = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Pre/post transform that maps a direction into canonical space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setup {
    AsIs,
    ReverseRows,
    ReverseInRows,
}

/// Explicit direction -> (axis, transform) table
fn sweep_plan(direction: Direction) -> (Axis, Setup) {
    match direction {
        Direction::Left => (Axis::Horizontal, Setup::AsIs),
        Direction::Right => (Axis::Horizontal, Setup::ReverseInRows),
        Direction::Up => (Axis::Vertical, Setup::AsIs),
        Direction::Down => (Axis::Vertical, Setup::ReverseRows),
    }
}

fn apply_setup(setup: Setup, board: &Board) -> Board {
    match setup {
        Setup::AsIs => board.clone(),
        Setup::ReverseRows => reversed_rows(board),
        Setup::ReverseInRows => reversed_in_rows(board),
    }
}

/// Resolve one move: slide, merge, and settle every tile toward
/// `direction`, returning the fully resolved next board.
///
/// Deterministic over tile values for a fixed direction and board, and
/// idempotent over values: resolving the same direction again changes
/// nothing. Keys of emptied cells are regenerated from `rng`; surviving
/// tiles keep their keys so renderers can track them.
pub fn resolve<R: Rng>(direction: Direction, board: &Board, rng: &mut R) -> Board {
    let (axis, setup) = sweep_plan(direction);
    let size = board.size();
    let mut moving = apply_setup(setup, board);

    // Merge locks, indexed like the cells. A cell that merged this move is
    // locked so it cannot merge again; the lock rides along if the merged
    // tile slides further. The table dies with this call.
    let mut locked = vec![false; size * size];

    // One pass advances a tile by at most one cell, so a tile starting at
    // the far wall needs size - 1 passes to cross the board.
    for _turn in 1..size {
        for y in 0..size {
            for x in 0..size {
                let (tx, ty) = match axis {
                    Axis::Horizontal if x > 0 => (x - 1, y),
                    Axis::Vertical if y > 0 => (x, y - 1),
                    // Already against the wall
                    _ => continue,
                };

                let source = *moving.get(x, y);
                let target = *moving.get(tx, ty);
                let src_idx = y * size + x;
                let tgt_idx = ty * size + tx;

                if !source.is_empty()
                    && source.value == target.value
                    && !locked[src_idx]
                    && !locked[tgt_idx]
                {
                    // Equal neighbors, neither merged yet this move
                    moving.set(tx, ty, Tile::merge(&source, &target));
                    moving.set(x, y, Tile::empty(rng));
                    locked[tgt_idx] = true;
                } else if !source.is_empty() && target.is_empty() {
                    // Slide into the gap, keeping the tile's identity
                    moving.set(tx, ty, source);
                    moving.set(x, y, Tile::empty(rng));
                    locked[tgt_idx] = locked[src_idx];
                    locked[src_idx] = false;
                }
                // Otherwise blocked: both cells stay put
            }
        }
    }

    apply_setup(setup, &moving)
}

/// True iff resolving `direction` changes at least one tile value.
///
/// A full resolve-and-compare, not a heuristic: boards are small (typically
/// 4x4), so correctness wins over speed here.
pub fn can_move(direction: Direction, board: &Board) -> bool {
    // The trial board is thrown away, so keys minted during it come from a
    // scratch rng; legality checks never consume game randomness.
    let mut scratch = SmallRng::seed_from_u64(0);
    let moved = resolve(direction, board, &mut scratch);
    moved.flat_values() != board.flat_values()
}

/// Legality of all four directions
pub fn movable_directions(board: &Board) -> DirectionMoves {
    let mut moves = DirectionMoves::default();
    for direction in Direction::ALL {
        moves.set(direction, can_move(direction, board));
    }
    moves
}

/// True iff no direction has a legal move left
pub fn is_immobile(board: &Board) -> bool {
    !movable_directions(board).any()
}
