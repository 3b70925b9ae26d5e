//! Game state transition tests - move counting, scoring, and game over

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tile_merge::core::{Board, GameState};
use tile_merge::types::Direction;

fn base_state(seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = Board::from_values(
        &[
            vec![2, 0, 0, 0],
            vec![0, 2, 2, 0],
            vec![0, 0, 2, 0],
            vec![2, 2, 2, 2],
        ],
        &mut rng,
    );
    GameState::from_board(board, seed)
}

#[test]
fn test_move_is_counted() {
    let moved = base_state(1).apply_move(Direction::Right);
    assert_eq!(moved.moves(), 1);
}

#[test]
fn test_move_scoring() {
    // RIGHT merges three pairs of 2s: 4 + 4 + 4 = 12
    let moved = base_state(1).apply_move(Direction::Right);
    assert_eq!(moved.score(), 12);
    assert_eq!(moved.score_earned(), 12);
}

#[test]
fn test_score_earned_resets_per_move() {
    let first = base_state(1).apply_move(Direction::Right);
    assert_eq!(first.score_earned(), 12);

    // Whatever the second move earns, the earned total must restart from
    // that move alone
    for direction in Direction::ALL {
        if !first.can_move(direction) {
            continue;
        }
        let second = first.apply_move(direction);
        assert_eq!(
            second.score_earned(),
            second.score() - first.score(),
            "direction {:?}",
            direction
        );
    }
}

#[test]
fn test_moving_spawns_one_tile() {
    let state = base_state(1);
    let filled_before = state
        .board()
        .flat_values()
        .iter()
        .filter(|&&v| v != 0)
        .count();

    // RIGHT performs three merges (-3 tiles) and one spawn (+1)
    let moved = state.apply_move(Direction::Right);
    let filled_after = moved
        .board()
        .flat_values()
        .iter()
        .filter(|&&v| v != 0)
        .count();
    assert_eq!(filled_after, filled_before - 3 + 1);
}

#[test]
fn test_illegal_move_is_silent_noop() {
    let mut rng = SmallRng::seed_from_u64(2);
    let board = Board::from_values(
        &[
            vec![2, 4, 8, 16],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ],
        &mut rng,
    );
    let state = GameState::from_board(board, 2);
    assert!(!state.can_move(Direction::Up));
    assert!(!state.can_move(Direction::Left));

    let unchanged = state.apply_move(Direction::Up);
    assert_eq!(unchanged.moves(), 0);
    assert_eq!(unchanged.score(), 0);
    assert_eq!(unchanged.board().flat_values(), state.board().flat_values());
}

#[test]
fn test_can_move_map_matches_queries() {
    let state = base_state(1);
    let map = state.movable();
    for direction in Direction::ALL {
        assert_eq!(map.get(direction), state.can_move(direction));
    }
}

#[test]
fn test_game_over_requires_full_immobile_board() {
    let mut rng = SmallRng::seed_from_u64(2);
    let stuck = Board::from_values(
        &[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ],
        &mut rng,
    );
    assert!(GameState::from_board(stuck, 2).is_game_over());

    let mut values = vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ];
    values[3][3] = 0;
    let open = Board::from_values(&values, &mut rng);
    assert!(!GameState::from_board(open, 2).is_game_over());
}

#[test]
fn test_states_are_independent_snapshots() {
    let state = base_state(1);
    let before = state.board().flat_values();

    let _moved = state.apply_move(Direction::Right);

    // The prior state is untouched by the transition
    assert_eq!(state.board().flat_values(), before);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_full_seeded_game_terminates() {
    // Drive a seeded game with a fixed direction rotation until it ends;
    // every intermediate state must stay internally consistent
    let mut state = GameState::new(20260827);
    let rotation = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let mut steps = 0;
    while !state.is_game_over() && steps < 50_000 {
        let direction = rotation[steps % 4];
        let next = state.apply_move(direction);
        if state.can_move(direction) {
            assert_eq!(next.moves(), state.moves() + 1);
            assert!(next.score() >= state.score());
        } else {
            assert_eq!(next.moves(), state.moves());
        }
        state = next;
        steps += 1;
    }

    assert!(state.is_game_over(), "game did not finish in {} steps", steps);
}

#[test]
fn test_snapshot_serde_roundtrip() {
    let state = base_state(1).apply_move(Direction::Right);
    let snap = state.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let back: tile_merge::core::GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);

    // A restored board reproduces the same values
    let mut rng = SmallRng::seed_from_u64(0);
    let restored = Board::from_values(&back.values, &mut rng);
    assert_eq!(restored.values(), state.board().values());
}
