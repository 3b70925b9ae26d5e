//! Tile module - the per-cell value object
//!
//! A tile carries a stable identity key so an external renderer can track
//! the same physical tile across boards and animate its movement. A value
//! of 0 means the cell is empty. Each tile also carries the points it has
//! earned from every merge it has ever participated in; the board score is
//! the sum of these.

use rand::Rng;

/// Opaque identity for a tile. The key does not change while the tile
/// slides or survives a merge; emptied cells and spawned tiles get a
/// fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey(u64);

impl TileKey {
    /// Mint a fresh key from the injected randomness source
    pub fn fresh<R: Rng>(rng: &mut R) -> Self {
        TileKey(rng.gen())
    }
}

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Identity, stable across moves for the same physical tile
    pub key: TileKey,
    /// 0 = empty; otherwise 2, 4, 8, ...
    pub value: u32,
    /// Cumulative points from every merge this tile took part in
    pub score: u32,
}

impl Tile {
    /// Create an empty tile with a fresh key
    pub fn empty<R: Rng>(rng: &mut R) -> Self {
        Self::with_value(0, rng)
    }

    /// Create a tile with the given value, zero score and a fresh key
    pub fn with_value<R: Rng>(value: u32, rng: &mut R) -> Self {
        Self {
            key: TileKey::fresh(rng),
            value,
            score: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Merge `source` into `target`, producing the tile left at the target
    /// cell. The merged value itself counts toward the score, on top of
    /// whatever both tiles had already earned. The target's key survives so
    /// the tile being merged into keeps its visual identity.
    ///
    /// Pure function of its inputs. The caller (the resolver) is
    /// responsible for marking the merged cell locked for the rest of the
    /// move so it cannot merge twice.
    pub fn merge(source: &Tile, target: &Tile) -> Tile {
        let value = source.value + target.value;
        Tile {
            key: target.key,
            value,
            score: value + source.score + target.score,
        }
    }
}
