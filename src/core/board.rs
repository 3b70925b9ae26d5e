//! Board module - an N x N grid of tiles
//!
//! Pure data plus construction and introspection helpers; all rules live in
//! the resolver. Uses a flat array in row-major order (y * size + x) for
//! cache locality, addressed as [y][x]. A board is never resized after
//! creation and never mutated once handed to a caller.

use rand::Rng;

use crate::core::tile::Tile;

/// The game board - size x size tiles in flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Create a board of empty tiles, each with a fresh key
    pub fn empty<R: Rng>(size: usize, rng: &mut R) -> Self {
        let cells = (0..size * size).map(|_| Tile::empty(rng)).collect();
        Self { size, cells }
    }

    /// Build a board from a plain grid of values, the shape used by test
    /// fixtures and by an external save/restore layer. Every tile starts
    /// with a fresh key and zero score.
    ///
    /// Panics if the grid is not square.
    pub fn from_values<R: Rng>(values: &[Vec<u32>], rng: &mut R) -> Self {
        let size = values.len();
        assert!(
            values.iter().all(|row| row.len() == size),
            "value grid must be square"
        );

        let cells = values
            .iter()
            .flatten()
            .map(|&value| Tile::with_value(value, rng))
            .collect();
        Self { size, cells }
    }

    pub(crate) fn from_parts(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    /// Tile at position (x, y)
    pub fn get(&self, x: usize, y: usize) -> &Tile {
        &self.cells[self.index(x, y)]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.index(x, y);
        self.cells[idx] = tile;
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Extract the plain value grid (inverse of `from_values`).
    /// This is the serialization boundary for external persistence.
    pub fn values(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|y| {
                let start = y * self.size;
                self.cells[start..start + self.size]
                    .iter()
                    .map(|tile| tile.value)
                    .collect()
            })
            .collect()
    }

    /// Values flattened into one row-major sequence
    pub fn flat_values(&self) -> Vec<u32> {
        self.cells.iter().map(|tile| tile.value).collect()
    }
}
