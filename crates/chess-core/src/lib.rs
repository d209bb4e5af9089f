//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rules engine:
//! - [`Piece`], [`PieceType`] and [`Color`] for piece representation
//! - [`Position`] for board coordinates (row and column, both 1-8)
//! - [`Move`] for move representation
//!
//! None of these types know the rules of chess.

mod color;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceType};
pub use position::{Position, PositionError};
