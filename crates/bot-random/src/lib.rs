//! Random self-play on top of the rules engine.
//!
//! The driver only uses the engine's public surface: it asks for legal
//! moves, plays one, and checks the game status after every move.

pub mod config;
pub mod runner;

pub use config::{ConfigError, SelfPlayConfig};
pub use runner::{play_game, GameSummary, Outcome};
