use crate::game_repr::{Move, MoveError, Orientation};
use super::{sq, wall};

// ==================== NOTATION TESTS ====================

#[test]
fn test_traversal_notation_round_trip() {
    for s in ["a1", "e9", "i1", "i9", "e5"] {
        let mv: Move = s.parse().unwrap();
        assert_eq!(mv.to_string(), s);
    }
}

#[test]
fn test_wall_notation_round_trip() {
    for s in ["a1h", "e5v", "h8h", "h8v"] {
        let mv: Move = s.parse().unwrap();
        assert_eq!(mv.to_string(), s);
    }
}

#[test]
fn test_corner_square_mapping() {
    assert_eq!((sq("a1").row(), sq("a1").col()), (0, 0));
    assert_eq!((sq("i1").row(), sq("i1").col()), (0, 8));
    assert_eq!((sq("a9").row(), sq("a9").col()), (8, 0));
    assert_eq!((sq("i9").row(), sq("i9").col()), (8, 8));
    assert_eq!((sq("e9").row(), sq("e9").col()), (8, 4));
}

#[test]
fn test_wall_notation_fields() {
    let w = wall("c4h");
    assert_eq!(w.anchor, sq("c4"));
    assert_eq!(w.orientation, Orientation::Horizontal);

    let w = wall("c4v");
    assert_eq!(w.orientation, Orientation::Vertical);
}

#[test]
fn test_malformed_notation_rejected() {
    for s in ["", "e", "e0", "j5", "e10", "e5x", "e5hh", "E5", " e5", "5e"] {
        assert_eq!(
            s.parse::<Move>(),
            Err(MoveError::Syntax),
            "'{}' should fail to parse",
            s
        );
    }
}
