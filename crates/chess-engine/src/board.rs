//! Square-by-square board storage.

use chess_core::{Color, Move, Piece, PieceType, Position};
use std::fmt;

/// Pieces of the back row, from column 1 to column 8.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board is pure storage: it holds at most one piece per square and
/// knows nothing about how pieces move.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board holding the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        board.reset_to_standard_setup();
        board
    }

    /// Clears every square, then places both sides' pieces on their home rows.
    ///
    /// White occupies rows 1 and 2, Black rows 7 and 8.
    pub fn reset_to_standard_setup(&mut self) {
        self.squares = [None; 64];
        for color in Color::ALL {
            let pawn_row = color.pawn_start_row();
            for (column, kind) in (1..=8u8).zip(BACK_ROW) {
                self.place(color.back_row(), column, Piece::new(color, kind));
                self.place(pawn_row, column, Piece::new(color, PieceType::Pawn));
            }
        }
    }

    fn place(&mut self, row: u8, column: u8, piece: Piece) {
        if let Ok(pos) = Position::new(row, column) {
            self.set(pos, Some(piece));
        }
    }

    /// Returns the piece on `pos`, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    /// Places `piece` on `pos`, or clears the square when `piece` is `None`.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    /// Plays `mov` on the board without any rule checks.
    ///
    /// Clears the start square and writes the mover to the end square,
    /// replacing it with the promotion piece when the move carries one.
    /// Returns whatever previously stood on the end square.
    pub fn apply(&mut self, mov: Move) -> Option<Piece> {
        let mover = self.get(mov.start()).map(|piece| match mov.promotion() {
            Some(kind) => Piece::new(piece.color(), kind),
            None => piece,
        });
        let captured = self.get(mov.end());
        self.set(mov.start(), None);
        self.set(mov.end(), mover);
        captured
    }

    /// Iterates over the occupied squares of `color`, row 1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| {
            self.get(pos)
                .filter(|piece| piece.color() == color)
                .map(|piece| (pos, piece))
        })
    }

    /// Locates the king of `color`, scanning all 64 squares.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        Position::all().find(|&pos| self.get(pos) == Some(king))
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            for column in 1..=8u8 {
                let c = Position::new(row, column)
                    .ok()
                    .and_then(|pos| self.get(pos))
                    .map_or('.', Piece::to_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        write!(f, "{}", self)?;
        write!(f, ")")
    }
}
