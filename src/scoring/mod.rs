//! Player identity and score tracking

mod player;
mod scoreboard;

pub use player::{Player, PlayerError};
pub use scoreboard::Scoreboard;
