//! Move representation.

use crate::{PieceType, Position};
use std::fmt;

/// A chess move: start square, end square and an optional promotion choice.
///
/// Equality is by this triple only; a move does not remember which piece made it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl Move {
    /// Creates a non-promoting move.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Creates a pawn move that promotes to `piece` on arrival.
    #[inline]
    pub const fn promoting(start: Position, end: Position, piece: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceType> {
        self.promotion
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinate(self) -> String {
        match self.promotion {
            Some(piece) => format!("{}{}{}", self.start, self.end, piece.to_char()),
            None => format!("{}{}", self.start, self.end),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
