//! Player trait: the move-provider abstraction for the turn loop.
//!
//! A player is anything that can produce the next move for the side it
//! controls: a human at a terminal, an AI, or in principle a network
//! peer. The game loop does not care which; it hands the player the
//! current state and waits.
//!
//! # String-level contract
//!
//! `next_move` returns move notation, not a parsed [`Move`]: the loop
//! parses and validates whatever comes back and reports rejections to
//! the player on the next prompt. This keeps the trait honest for human
//! input, which arrives as text and may well be illegal. AI players
//! produce notation for moves they already know are legal.
//!
//! Returning `None` forfeits the game (for a human, end of input).
//!
//! # Synchronous design
//!
//! `next_move` blocks. A human player blocks on stdin, an AI player
//! blocks on the search. For a turn-based terminal game that is the
//! right shape; there is nothing useful to do while waiting.
//!
//! [`Move`]: crate::game_repr::Move

use crate::game_repr::GameState;

/// An agent that supplies moves for one side.
pub trait Player {
    /// Produce the next move in notation form, or `None` to forfeit.
    fn next_move(&mut self, state: &GameState) -> Option<String>;

    /// Display name used in prompts and logs.
    fn name(&self) -> &str {
        "Player"
    }
}
