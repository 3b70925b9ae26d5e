//! Game state module - one immutable snapshot per move
//!
//! A state is never mutated after construction: applying a direction
//! builds a brand-new state from the resolved and respawned board. Prior
//! states hold no back-references and can be dropped once superseded.
//!
//! The rng rides inside the state, so a transition is a pure function of
//! (state, direction): equal seeds and equal move sequences produce
//! identical games.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::board::Board;
use crate::core::resolve::{movable_directions, resolve};
use crate::core::scoring::board_score;
use crate::core::snapshot::GameSnapshot;
use crate::core::spawn::{spawn, spawned_board};
use crate::types::{Direction, DirectionMoves, DEFAULT_BOARD_SIZE};

/// Complete game state: board plus the scalars derived from it
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    moves: u32,
    score: u32,
    score_earned: u32,
    game_over: bool,
    can_move: DirectionMoves,
    rng: SmallRng,
}

impl GameState {
    /// New game on the default 4x4 board: two tiles spawned, zero score
    pub fn new(seed: u64) -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE, seed)
    }

    /// New game on a size x size board
    pub fn with_size(size: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = spawned_board(size, &mut rng);
        Self::from_parts(board, 0, 0, rng)
    }

    /// Rebuild a state around an existing board, e.g. one restored from a
    /// saved value grid. Move count and earned score start at zero; total
    /// score and legality are recomputed from the tiles.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self::from_parts(board, 0, 0, SmallRng::seed_from_u64(seed))
    }

    fn from_parts(board: Board, moves: u32, score_earned: u32, rng: SmallRng) -> Self {
        let can_move = movable_directions(&board);
        Self {
            score: board_score(&board),
            game_over: !can_move.any(),
            can_move,
            board,
            moves,
            score_earned,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score gained by the move that produced this state
    pub fn score_earned(&self) -> u32 {
        self.score_earned
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether `direction` would change the board
    pub fn can_move(&self, direction: Direction) -> bool {
        self.can_move.get(direction)
    }

    /// The full per-direction legality map
    pub fn movable(&self) -> DirectionMoves {
        self.can_move
    }

    /// Apply one move, producing the next state.
    ///
    /// An illegal direction is not an error: it returns an unchanged copy
    /// of this state, with no move counted and nothing spawned. A legal
    /// move resolves the board, spawns one tile, and derives every scalar
    /// fresh from the new board.
    pub fn apply_move(&self, direction: Direction) -> GameState {
        if !self.can_move.get(direction) {
            return self.clone();
        }

        let mut rng = self.rng.clone();
        let board = spawn(&resolve(direction, &self.board, &mut rng), &mut rng);
        let score_earned = board_score(&board).saturating_sub(self.score);
        GameState::from_parts(board, self.moves + 1, score_earned, rng)
    }

    /// Serializable plain-values view of this state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            values: self.board.values(),
            moves: self.moves,
            score: self.score,
            score_earned: self.score_earned,
            game_over: self.game_over,
            can_move: self.can_move,
        }
    }
}
