//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of optional pieces with no rule knowledge
//! - [`MovementRule`] and [`piece_moves`] - pseudo-legal move generation
//! - [`Game`] - the side to move, legality filtering, move application and
//!   check/checkmate/stalemate detection
//! - [`perft`](movegen::perft::perft) - leaf-node counting for generator validation
//!
//! # Architecture
//!
//! Data flows bottom-up. The board answers occupancy queries, the move
//! generators turn those into pseudo-legal candidates, and [`Game`] keeps only
//! the candidates that do not leave the mover's king attacked. Each candidate
//! is tried on a scratch copy of the board, so querying moves never disturbs
//! the game.
//!
//! Castling, en passant and the draw rules other than stalemate are not
//! implemented.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Position};
//! use chess_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let e2 = Position::from_algebraic("e2").unwrap();
//! let e4 = Position::from_algebraic("e4").unwrap();
//! game.make_move(Move::new(e2, e4)).unwrap();
//! assert_eq!(game.team_turn(), Color::Black);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

mod board;
mod game;
pub mod movegen;

pub use board::Board;
pub use game::{Game, GameError, GameStatus, InvalidMoveReason};
pub use movegen::{is_king_attacked, piece_moves, MoveList, MovementRule};
