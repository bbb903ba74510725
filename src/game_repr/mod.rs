mod coord;
mod moves;
mod state;
mod wall;

#[cfg(test)]
mod tests;

pub use coord::*;
pub use moves::*;
pub use state::*;
pub use wall::*;
