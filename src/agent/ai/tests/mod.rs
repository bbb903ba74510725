use crate::game_repr::{Coord, GameState, Move};

// ==================== HELPER FUNCTIONS ====================

/// Helper to replay a move sequence, panicking on any rejected move
pub fn played(moves: &[&str]) -> GameState {
    GameState::from_moves(moves).expect("replay of a known-good sequence")
}

/// Helper to parse algebraic square notation
pub fn sq(s: &str) -> Coord {
    match s.parse().expect("valid square notation") {
        Move::Traverse(coord) => coord,
        Move::PlaceWall(_) => panic!("expected a square, got a wall: {}", s),
    }
}

/// Player 2 spends all ten walls on the far side of the board while
/// player 1 shuffles d9/e9, ending back on e9. Twenty moves, player 1
/// to move.
pub const EXHAUST_PLAYER_TWO: [&str; 20] = [
    "d9", "a1v", "e9", "a3v", "d9", "a5v", "e9", "a7v", "d9", "b1v", "e9", "b3v", "d9", "b5v",
    "e9", "b7v", "d9", "c1v", "e9", "c3v",
];

// ==================== TEST MODULES ====================

mod evaluation_tests;
