// Grid coordinates for the 9x9 board.
//
// Rows and columns run 0..=8. Algebraic notation maps column letters a-i
// to columns 0-8 and row digits 1-9 to rows 0-8, so "e9" is (8, 4):
// player 1's starting square at the bottom of the rendered board.

use std::fmt;

/// Board edge length in squares.
pub const BOARD_SIZE: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Panics when the coordinate falls off the board; every coordinate
    /// the engine constructs is expected to be in bounds.
    pub fn new(row: u8, col: u8) -> Coord {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "coordinate off the board: ({}, {})",
            row,
            col
        );
        Coord { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Flattened row-major index, used to address the adjacency table.
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Coordinate at the given offset, or `None` past the board edge.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Mirror image of `self` through `other`: the straight-line
    /// continuation used for jump geometry. `None` when it leaves the
    /// board.
    pub fn opposite(&self, other: Coord) -> Option<Coord> {
        let dr = other.row as i8 - self.row as i8;
        let dc = other.col as i8 - self.col as i8;
        other.offset(dr, dc)
    }

    /// True when the two coordinates share a row or a column.
    pub fn is_cardinal_to(&self, other: Coord) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// In-bounds coordinates within Chebyshev distance `radius`, excluding
    /// `self`, in row-major order. Candidate generator for traversals.
    pub fn neighborhood(&self, radius: i8) -> Vec<Coord> {
        let mut coords = Vec::new();
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(c) = self.offset(dr, dc) {
                    coords.push(c);
                }
            }
        }
        coords
    }

    /// Every square on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
