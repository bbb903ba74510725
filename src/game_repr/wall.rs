// Walls: oriented two-unit barriers between squares.
//
// A wall is identified by its northwest anchor and orientation. The
// anchor names the square above-left of the wall's center, so a legal
// anchor never sits on row 8 or column 8.

use std::fmt;

use smallvec::SmallVec;

use super::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Wall {
    pub fn new(anchor: Coord, orientation: Orientation) -> Wall {
        Wall {
            anchor,
            orientation,
        }
    }

    /// The two edge pairs this wall severs. A horizontal wall at (r,c)
    /// cuts (r,c)-(r+1,c) and (r,c+1)-(r+1,c+1); a vertical wall cuts
    /// (r,c)-(r,c+1) and (r+1,c)-(r+1,c+1). Panics on a border anchor,
    /// which validation rejects before ever severing.
    pub fn severed_edges(&self) -> [(Coord, Coord); 2] {
        let (r, c) = (self.anchor.row(), self.anchor.col());
        match self.orientation {
            Orientation::Horizontal => [
                (Coord::new(r, c), Coord::new(r + 1, c)),
                (Coord::new(r, c + 1), Coord::new(r + 1, c + 1)),
            ],
            Orientation::Vertical => [
                (Coord::new(r, c), Coord::new(r, c + 1)),
                (Coord::new(r + 1, c), Coord::new(r + 1, c + 1)),
            ],
        }
    }

    /// The three placements that geometrically intersect this wall: the
    /// perpendicular wall sharing its center and the two collinear walls
    /// one unit to either side. Placements off the board are omitted;
    /// they can never have been placed.
    pub fn conflicts(&self) -> SmallVec<[Wall; 3]> {
        let mut walls = SmallVec::new();
        match self.orientation {
            Orientation::Horizontal => {
                walls.push(Wall::new(self.anchor, Orientation::Vertical));
                for dc in [-1, 1] {
                    if let Some(anchor) = self.anchor.offset(0, dc) {
                        walls.push(Wall::new(anchor, Orientation::Horizontal));
                    }
                }
            }
            Orientation::Vertical => {
                walls.push(Wall::new(self.anchor, Orientation::Horizontal));
                for dr in [-1, 1] {
                    if let Some(anchor) = self.anchor.offset(dr, 0) {
                        walls.push(Wall::new(anchor, Orientation::Vertical));
                    }
                }
            }
        }
        walls
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}{}", self.anchor, letter)
    }
}
