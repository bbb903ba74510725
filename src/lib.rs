//! Quoridor rules engine and tree-search opponent.
//!
//! `game_repr` owns the board: a dynamic reachability graph over the 9x9
//! grid, pawn traversal rules (including jumps), wall placement with the
//! connectivity-preservation constraint, and BFS shortest paths.
//!
//! `agent` owns the players: the `Player` trait the turn loop talks to,
//! a line-oriented human player, and the minimax/alpha-beta AI.

pub mod agent;
pub mod game_repr;
