// Move grammar.
//
// The wire notation is the original two- and three-token form:
// "e2" steps the pawn to e2, "e2h" anchors a horizontal wall at e2.
// Syntax is checked here, before any semantic validation.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use super::{Coord, Orientation, Wall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Traverse(Coord),
    PlaceWall(Wall),
}

/// Why a move was rejected. Rejected moves never mutate the state.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[display("move does not match [a-i][1-9][hv]?")]
    Syntax,
    #[display("illegal traversal")]
    IllegalTraversal,
    #[display("illegal wall placement")]
    IllegalWallPlacement,
    #[display("the game is already over")]
    GameOver,
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Move, MoveError> {
        let bytes = s.as_bytes();
        let (col, row) = match bytes {
            [c @ b'a'..=b'i', r @ b'1'..=b'9']
            | [c @ b'a'..=b'i', r @ b'1'..=b'9', b'h' | b'v'] => (*c - b'a', *r - b'1'),
            _ => return Err(MoveError::Syntax),
        };
        let coord = Coord::new(row, col);
        match bytes.get(2) {
            None => Ok(Move::Traverse(coord)),
            Some(b'h') => Ok(Move::PlaceWall(Wall::new(coord, Orientation::Horizontal))),
            Some(b'v') => Ok(Move::PlaceWall(Wall::new(coord, Orientation::Vertical))),
            Some(_) => unreachable!("orientation checked by the pattern above"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Traverse(coord) => coord.fmt(f),
            Move::PlaceWall(wall) => wall.fmt(f),
        }
    }
}
