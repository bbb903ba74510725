use super::*;

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

/// Helper to parse wall notation
pub fn wall(s: &str) -> Wall {
    match s.parse().expect("valid wall notation") {
        Move::PlaceWall(wall) => wall,
        Move::Traverse(_) => panic!("expected a wall, got a square: {}", s),
    }
}

/// Helper to check whether a move list contains a traversal to `dest`
pub fn has_traversal(moves: &[Move], dest: &str) -> bool {
    moves.contains(&Move::Traverse(sq(dest)))
}

// ==================== TEST MODULES ====================

mod notation;
