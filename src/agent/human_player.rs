//! Human player: reads move notation from stdin.
//!
//! One prompt per turn. The input is trimmed and handed back verbatim;
//! the game loop parses and validates it, so a typo costs a retry, not
//! the game. End of input (Ctrl-D) forfeits.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::game_repr::GameState;

use super::player::Player;

pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> HumanPlayer {
        HumanPlayer { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, _state: &GameState) -> Option<String> {
        print!("{}> ", self.name);
        if io::stdout().flush().is_err() {
            return None;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!("failed to read from stdin: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
