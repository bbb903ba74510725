//! Position evaluation.
//!
//! Scores are from the point of view of `side`, in abstract centipawn-
//! like units. Two signals only: the shortest-path race, weighted
//! heavily, and walls in hand as a lighter tiebreaker. Quoridor
//! positions have no material, so path difference is the whole game.

use crate::game_repr::{GameState, WALL_QUOTA};

/// Score for a won game; no heuristic score can reach it.
pub const WIN_SCORE: i32 = 10_000;

const PATH_WEIGHT: i32 = 10;
const WALL_WEIGHT: i32 = 2;

/// Heuristic value of `state` for player `side`.
pub fn evaluate(state: &GameState, side: usize) -> i32 {
    if state.is_over() {
        return if state.winner() == side {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }
    let rival = 1 - side;
    let own_path = state.shortest_path_to_goal(side).len() as i32;
    let rival_path = state.shortest_path_to_goal(rival).len() as i32;
    let own_walls = (WALL_QUOTA - state.walls_placed(side)) as i32;
    let rival_walls = (WALL_QUOTA - state.walls_placed(rival)) as i32;

    PATH_WEIGHT * (rival_path - own_path) + WALL_WEIGHT * (own_walls - rival_walls)
}
