use crate::agent::ai::{evaluate, WIN_SCORE};
use crate::game_repr::GameState;
use super::played;

// ==================== EVALUATION TESTS ====================

#[test]
fn test_initial_position_is_balanced() {
    let state = GameState::new();
    assert_eq!(evaluate(&state, 0), 0);
    assert_eq!(evaluate(&state, 1), 0);
}

#[test]
fn test_forward_step_gains_path_weight() {
    let state = played(&["e8"]);
    assert_eq!(evaluate(&state, 0), 10);
    assert_eq!(evaluate(&state, 1), -10);
}

#[test]
fn test_scores_are_antisymmetric_with_equal_walls() {
    let state = played(&["e8", "e2", "e7", "f2", "e6", "f3"]);
    assert_eq!(evaluate(&state, 0), -evaluate(&state, 1));
}

#[test]
fn test_walls_in_hand_count() {
    // Player 1 spends a wall that hurts nobody's path.
    let state = played(&["a8h"]);
    assert_eq!(evaluate(&state, 0), -2);
    assert_eq!(evaluate(&state, 1), 2);
}

#[test]
fn test_terminal_position_scores_win() {
    let state = played(&[
        "e8", "f1", "e7", "f2", "e6", "f1", "e5", "f2", "e4", "f1", "e3", "f2", "e2", "f1",
        "e1",
    ]);
    assert!(state.is_over());
    assert_eq!(evaluate(&state, 0), WIN_SCORE);
    assert_eq!(evaluate(&state, 1), -WIN_SCORE);
}
