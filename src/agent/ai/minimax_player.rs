//! MinimaxPlayer - the AI opponent behind the Player trait.
//!
//! Move selection runs the alpha-beta search at a fixed depth with the
//! path-race evaluator scoring for whichever side the player finds
//! itself on.
//!
//! # Wall exhaustion
//!
//! Once this side has placed all ten walls the game degenerates into a
//! pure footrace, and the full search is wasted effort: the player
//! instead follows its shortest path directly. The BFS suggestion is
//! still checked against the jump rules, because the path treats the
//! opponent's pawn as empty space. When the suggested step is not a
//! legal traversal the player falls back to a uniformly random legal
//! move rather than working out the correct jump. That keeps the move
//! legal but occasionally throws away a tempo; a deliberate trade of
//! strength for simplicity in an already-won race.

use log::debug;
use rand::Rng;

use crate::agent::player::Player;
use crate::game_repr::{GameState, Move, WALL_QUOTA};

use super::evaluation::evaluate;
use super::minimax::{minimax, DEFAULT_DEPTH};

pub struct MinimaxPlayer {
    name: String,
    depth: u8,
}

impl MinimaxPlayer {
    pub fn new(name: impl Into<String>) -> MinimaxPlayer {
        MinimaxPlayer::with_depth(name, DEFAULT_DEPTH)
    }

    /// Player searching `depth` plies; a depth of zero is clamped to one
    /// so the search always returns a move.
    pub fn with_depth(name: impl Into<String>, depth: u8) -> MinimaxPlayer {
        MinimaxPlayer {
            name: name.into(),
            depth: depth.max(1),
        }
    }

    fn race_to_goal(&self, state: &GameState) -> Option<Move> {
        let path = state.shortest_path_to_win();
        if let Some(&step) = path.first() {
            if state.is_valid_traversal(step) {
                return Some(Move::Traverse(step));
            }
            debug!(
                "{}: path step {} is not a legal traversal, moving at random",
                self.name, step
            );
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let pick = rand::thread_rng().gen_range(0..moves.len());
        Some(moves[pick])
    }
}

impl Player for MinimaxPlayer {
    fn next_move(&mut self, state: &GameState) -> Option<String> {
        let side = state.current_player();
        let chosen = if state.walls_placed(side) >= WALL_QUOTA {
            self.race_to_goal(state)?
        } else {
            let (score, best) = minimax(
                state,
                self.depth,
                i32::MIN,
                i32::MAX,
                true,
                &|s: &GameState| evaluate(s, side),
            );
            debug!("{}: search depth {} scored {}", self.name, self.depth, score);
            best?
        };
        Some(chosen.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
