// Board/graph engine.
//
// The board is a dynamic reachability graph: one node per square, one
// edge per currently-open pawn step. The adjacency table is a flattened
// array of small neighbor lists; neighbor insertion order (north, west,
// south, east) is preserved because BFS tie-breaking follows it.
//
// Wall placement permanently removes the two edge pairs it severs.
// Placement legality is proven on a probe copy of the state, so
// validation is observably read-only: no caller can see a half-severed
// graph.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::debug;
use smallvec::SmallVec;

use super::{Coord, Move, MoveError, Orientation, Wall, BOARD_SIZE};

/// Walls a single player may place over a game.
pub const WALL_QUOTA: u8 = 10;

/// Goal rows by player index: player 1 races to row 0, player 2 to row 8.
pub const GOAL_ROWS: [u8; 2] = [0, BOARD_SIZE - 1];

const PLAYER_ICONS: [char; 2] = ['A', 'B'];
const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

type Adjacency = [SmallVec<[Coord; 4]>; CELLS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    adjacency: Adjacency,
    walls: Vec<Wall>,
    pawns: [Coord; 2],
    walls_placed: [u8; 2],
    turn: u32,
}

impl GameState {
    /// Standard initial layout: fully connected graph, pawns on e9 and e1.
    pub fn new() -> GameState {
        let mut adjacency: Adjacency = std::array::from_fn(|_| SmallVec::new());
        for sq in Coord::all() {
            for (dr, dc) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
                if let Some(n) = sq.offset(dr, dc) {
                    adjacency[sq.index()].push(n);
                }
            }
        }
        GameState {
            adjacency,
            walls: Vec::new(),
            pawns: [Coord::new(8, 4), Coord::new(0, 4)], // e9, e1
            walls_placed: [0, 0],
            turn: 0,
        }
    }

    /// Replay a game from the initial layout, failing on the first
    /// rejected move.
    pub fn from_moves<S: AsRef<str>>(moves: &[S]) -> Result<GameState, MoveError> {
        let mut state = GameState::new();
        for mv in moves {
            state.apply(mv.as_ref())?;
        }
        Ok(state)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Index of the player to move: 0 on even turns, 1 on odd.
    pub fn current_player(&self) -> usize {
        (self.turn % 2) as usize
    }

    pub fn pawn(&self, player: usize) -> Coord {
        self.pawns[player]
    }

    pub fn current_player_position(&self) -> Coord {
        self.pawns[self.current_player()]
    }

    pub fn other_player_position(&self) -> Coord {
        self.pawns[1 - self.current_player()]
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn walls_placed(&self, player: usize) -> u8 {
        self.walls_placed[player]
    }

    pub fn current_player_walls_placed(&self) -> u8 {
        self.walls_placed[self.current_player()]
    }

    fn neighbors(&self, sq: Coord) -> &[Coord] {
        &self.adjacency[sq.index()]
    }

    fn has_edge(&self, a: Coord, b: Coord) -> bool {
        self.adjacency[a.index()].contains(&b)
    }

    // Edges are undirected: both endpoint lists are updated together.
    fn remove_edge(&mut self, a: Coord, b: Coord) {
        self.adjacency[a.index()].retain(|c| *c != b);
        self.adjacency[b.index()].retain(|c| *c != a);
    }

    fn sever(&mut self, wall: Wall) {
        for (a, b) in wall.severed_edges() {
            self.remove_edge(a, b);
        }
    }

    /// Decide whether the player to move may step or jump to `dest`.
    ///
    /// An occupied square is never a destination; a direct neighbor
    /// always is. When the pawns face each other, the straight jump is
    /// forced while the lane behind the opponent is open; once a wall or
    /// the board edge blocks it, any square around the opponent serves
    /// as a diagonal jump.
    pub fn is_valid_traversal(&self, dest: Coord) -> bool {
        let mover = self.current_player_position();
        let other = self.other_player_position();
        if dest == mover || dest == other {
            return false;
        }
        if self.has_edge(mover, dest) {
            return true;
        }
        if self.has_edge(mover, other) {
            let lane_open = mover
                .opposite(other)
                .is_some_and(|behind| self.has_edge(other, behind));
            if lane_open {
                return self.has_edge(other, dest) && mover.is_cardinal_to(dest);
            }
            return self.has_edge(other, dest);
        }
        false
    }

    /// Decide whether the player to move may place `wall`: quota, border,
    /// intersection with placed walls, then connectivity for both pawns,
    /// checked on a probe copy so the live graph is untouched.
    pub fn is_valid_wall_placement(&self, wall: Wall) -> bool {
        if self.current_player_walls_placed() >= WALL_QUOTA {
            return false;
        }
        // The wall spans toward row+1/col+1; border anchors hang off the
        // grid.
        if wall.anchor.row() == BOARD_SIZE - 1 || wall.anchor.col() == BOARD_SIZE - 1 {
            return false;
        }
        if self.walls.contains(&wall) || wall.conflicts().iter().any(|w| self.walls.contains(w)) {
            return false;
        }
        let mut probe = self.clone();
        probe.sever(wall);
        probe.has_path_to_goal()
    }

    /// True while both pawns keep a path to their goal rows. Holds for
    /// every reachable state; wall validation enforces it up front.
    pub fn has_path_to_goal(&self) -> bool {
        !self.shortest_path_to_goal(0).is_empty() && !self.shortest_path_to_goal(1).is_empty()
    }

    pub fn shortest_path_to_goal(&self, player: usize) -> Vec<Coord> {
        self.shortest_path_to_row(self.pawns[player], GOAL_ROWS[player])
    }

    /// Shortest path for the player to move to reach their goal row.
    pub fn shortest_path_to_win(&self) -> Vec<Coord> {
        self.shortest_path_to_goal(self.current_player())
    }

    /// BFS over the live graph from `src` to the first square whose row
    /// equals `row`. The path excludes `src` and includes the goal
    /// square; it is empty when the row is unreachable (and when `src`
    /// already sits on it). Ties break by enqueue order, which follows
    /// the adjacency insertion order.
    pub fn shortest_path_to_row(&self, src: Coord, row: u8) -> Vec<Coord> {
        let mut queue = VecDeque::new();
        let mut parent: HashMap<Coord, Coord> = HashMap::new();
        queue.push_back(src);
        parent.insert(src, src);
        while let Some(t) = queue.pop_front() {
            if t.row() == row {
                let mut path = Vec::new();
                let mut node = t;
                while node != src {
                    path.push(node);
                    node = parent[&node];
                }
                path.reverse();
                return path;
            }
            for &n in self.neighbors(t) {
                if !parent.contains_key(&n) {
                    parent.insert(n, t);
                    queue.push_back(n);
                }
            }
        }
        Vec::new()
    }

    /// Parse and apply one move for the player to move.
    pub fn apply(&mut self, mv: &str) -> Result<(), MoveError> {
        self.apply_move(mv.parse()?)
    }

    /// Apply one validated move; on success the turn counter advances.
    /// A rejected move leaves the state untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mover = self.current_player();
        match mv {
            Move::Traverse(dest) => {
                if !self.is_valid_traversal(dest) {
                    return Err(MoveError::IllegalTraversal);
                }
                self.pawns[mover] = dest;
            }
            Move::PlaceWall(wall) => {
                if !self.is_valid_wall_placement(wall) {
                    return Err(MoveError::IllegalWallPlacement);
                }
                self.walls_placed[mover] += 1;
                self.walls.push(wall);
                self.sever(wall);
            }
        }
        debug!("turn {}: {} plays {}", self.turn, PLAYER_ICONS[mover], mv);
        self.turn += 1;
        Ok(())
    }

    /// True once either pawn stands on its goal row.
    pub fn is_over(&self) -> bool {
        self.pawns[0].row() == GOAL_ROWS[0] || self.pawns[1].row() == GOAL_ROWS[1]
    }

    /// Winner of a finished game. Row 0 is checked first, so player 1
    /// takes priority in the (unreachable) case both pawns stand on
    /// their goal rows.
    pub fn winner(&self) -> usize {
        if self.pawns[0].row() == GOAL_ROWS[0] {
            0
        } else {
            1
        }
    }

    /// Every legal move for the player to move: traversal candidates
    /// within graph distance 2 of the pawn, then every wall placement
    /// over the grid, in deterministic enumeration order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for dest in self.current_player_position().neighborhood(2) {
            if self.is_valid_traversal(dest) {
                moves.push(Move::Traverse(dest));
            }
        }
        for anchor in Coord::all() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let wall = Wall::new(anchor, orientation);
                if self.is_valid_wall_placement(wall) {
                    moves.push(Move::PlaceWall(wall));
                }
            }
        }
        moves
    }

    // Board-art helpers. The rendered lattice is a (2*9+1)-square grid:
    // odd/odd cells hold pawns, even rows hold horizontal wall segments,
    // even columns hold vertical ones.

    fn art_square(i: i32, j: i32) -> Option<Coord> {
        let row = (i - 1) >> 1;
        let col = (j - 1) >> 1;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn wall_at(&self, i: i32, j: i32) -> bool {
        let (anchors, orientation) = if i % 2 == 0 {
            (
                [Self::art_square(i - 1, j), Self::art_square(i - 1, j - 2)],
                Orientation::Horizontal,
            )
        } else {
            (
                [Self::art_square(i, j - 1), Self::art_square(i - 2, j - 1)],
                Orientation::Vertical,
            )
        };
        anchors
            .iter()
            .flatten()
            .any(|&a| self.walls.contains(&Wall::new(a, orientation)))
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mover = self.current_player();
        writeln!(
            f,
            "Turn: {} | Player to Move: {} | Walls Remaining: {}",
            self.turn,
            PLAYER_ICONS[mover],
            WALL_QUOTA - self.walls_placed[mover]
        )?;
        write!(f, "   ")?;
        for c in b'a'..=b'i' {
            write!(f, "{}   ", c as char)?;
        }
        writeln!(f)?;
        let span = 2 * BOARD_SIZE as i32 + 1;
        for i in 0..span {
            for j in 0..span {
                if j == 0 {
                    if i % 2 == 0 {
                        write!(f, " ")?;
                    } else {
                        write!(f, "{}", (i + 1) >> 1)?;
                    }
                }
                if (i + j) % 2 == 0 {
                    if j % 2 == 0 {
                        write!(f, "+")?;
                    } else if let Some(sq) =
                        Self::art_square(i, j).filter(|sq| self.pawns.contains(sq))
                    {
                        let icon = if self.pawns[0] == sq {
                            PLAYER_ICONS[0]
                        } else {
                            PLAYER_ICONS[1]
                        };
                        write!(f, " {} ", icon)?;
                    } else {
                        write!(f, "   ")?;
                    }
                } else if i % 2 == 0 {
                    write!(f, "{}", if self.wall_at(i, j) { "###" } else { "---" })?;
                } else {
                    write!(f, "{}", if self.wall_at(i, j) { "#" } else { "|" })?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
