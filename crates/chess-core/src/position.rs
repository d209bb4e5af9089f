//! Board coordinates.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a [`Position`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("position out of range: row {row}, column {column} (both must be in 1..=8)")]
    OutOfRange { row: u8, column: u8 },
}

/// A square on the board, addressed by row (rank) and column (file), both 1-8.
///
/// Row 1 is White's back row; column 1 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Creates a position, rejecting coordinates outside the board.
    pub const fn new(row: u8, column: u8) -> Result<Self, PositionError> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Ok(Position { row, column })
        } else {
            Err(PositionError::OutOfRange { row, column })
        }
    }

    /// Creates a position from a 0-63 index (row-major, a1 = 0, h8 = 63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Position {
                row: index / 8 + 1,
                column: index % 8 + 1,
            })
        } else {
            None
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Position {
            row: rank - b'0',
            column: file - b'a' + 1,
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.column as usize - 1)
    }

    /// Returns the position `dr` rows and `dc` columns away, or `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let column = self.column as i16 + dc as i16;
        if row < 1 || row > 8 || column < 1 || column > 8 {
            None
        } else {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        }
    }

    /// Iterates over all 64 positions, row 1 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64u8).filter_map(Position::from_index)
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.column - 1) as char, self.row)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
