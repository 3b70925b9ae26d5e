//! Core types shared across the crate
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};

/// Default board edge length (the classic game is played on 4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Chance that a freshly spawned tile is a 4 instead of a 2
pub const FOUR_TILE_CHANCE: f64 = 0.1;

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset (dx, dy) for this direction
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive).
    /// Anything that is not one of the four directions is rejected here,
    /// at the boundary, instead of degrading to a silent no-op move.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Per-direction legality map: which moves would change the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionMoves {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionMoves {
    /// Legality for one direction
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Left => self.left = value,
            Direction::Right => self.right = value,
            Direction::Up => self.up = value,
            Direction::Down => self.down = value,
        }
    }

    /// True if at least one direction can move
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}
