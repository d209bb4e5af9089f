//! Plays random legal games against itself.

use chess_core::Color;
use chess_engine::{Game, GameStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Checkmate,
    Stalemate,
    PlyLimit,
    /// The engine contradicted itself: it rejected a move it listed as legal,
    /// or listed no moves for a side it did not report as mated or stalemated.
    EngineError,
}

/// Result of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// 1-based game number within the run.
    pub game: u32,
    /// Plies actually played.
    pub plies: u32,
    pub outcome: Outcome,
    /// Winning side after a checkmate.
    #[serde(serialize_with = "serialize_color")]
    pub winner: Option<Color>,
}

fn serialize_color<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match color {
        Some(color) => serializer.collect_str(color),
        None => serializer.serialize_none(),
    }
}

/// Plays one game from the standard start, choosing uniformly among legal moves.
pub fn play_game<R: Rng>(number: u32, max_plies: u32, rng: &mut R) -> GameSummary {
    let mut game = Game::new();
    let mut plies = 0;

    let outcome = loop {
        match game.status() {
            GameStatus::Checkmate(_) => break Outcome::Checkmate,
            GameStatus::Stalemate(_) => break Outcome::Stalemate,
            GameStatus::Check(_) | GameStatus::InProgress => {}
        }
        if plies >= max_plies {
            break Outcome::PlyLimit;
        }

        let moves = game.legal_moves();
        let Some(&mov) = moves.as_slice().choose(rng) else {
            tracing::error!(game = number, ply = plies, "no legal moves in an unfinished game");
            break Outcome::EngineError;
        };
        if let Err(e) = game.make_move(mov) {
            tracing::error!(game = number, ply = plies, "engine rejected its own move: {}", e);
            break Outcome::EngineError;
        }
        plies += 1;
        tracing::debug!(game = number, ply = plies, %mov, "played");
    };

    let winner = game.status().winner();
    tracing::info!(game = number, plies, ?outcome, ?winner, "game finished");
    tracing::debug!("final board:\n{}", game.board());

    GameSummary {
        game: number,
        plies,
        outcome,
        winner,
    }
}
