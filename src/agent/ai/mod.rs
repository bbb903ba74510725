// AI agent - depth-limited minimax with alpha-beta pruning.
//
// The search is split the same way throughout: `minimax` owns the tree
// walk and knows nothing about what makes a position good, `evaluation`
// scores leaves, and `MinimaxPlayer` wires the two into the Player
// trait and handles the one situation the search cannot, a side with no
// walls left to place.

mod evaluation;
mod minimax;
mod minimax_player;

#[cfg(test)]
mod tests;

pub use evaluation::{evaluate, WIN_SCORE};
pub use minimax::{minimax, DEFAULT_DEPTH};
pub use minimax_player::MinimaxPlayer;
