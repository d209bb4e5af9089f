//! Game state: legality filtering, move application and terminal-state detection.
//!
//! The [`Game`] struct owns a [`Board`] and the side to move. It is the only
//! component that filters pseudo-legal moves down to legal ones and the only
//! one that changes whose turn it is.

use crate::movegen::{is_king_attacked, piece_moves};
use crate::{Board, MoveList};
use chess_core::{Color, Move, Piece, Position};
use thiserror::Error;

/// Why a move was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("no piece on the start square")]
    EmptySquare,
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },
    #[error("not a legal move in this position")]
    NotLegal,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move was rejected; the game is unchanged.
    #[error("invalid move {mov}: {reason}")]
    InvalidMove {
        mov: Move,
        reason: InvalidMoveReason,
    },
}

/// Classification of a game for the side to move.
///
/// This is derived from the board and turn on every call; nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    InProgress,
    /// The given side is in check but has a way out.
    Check(Color),
    /// The given side is in check with no legal moves.
    Checkmate(Color),
    /// The given side is not in check but has no legal moves.
    Stalemate(Color),
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }

    /// Returns the winning side after a checkmate.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

/// A chess game: a board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting arrangement, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Color::White,
        }
    }

    /// Creates a game from an arbitrary board.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the whole board. The side to move is left as it was.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns the piece on `pos`, if any.
    pub fn piece(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }

    /// Returns the side to move.
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns the legal moves of the piece on `pos`, or `None` if the square is empty.
    ///
    /// Every pseudo-legal candidate is played on a scratch copy of the board
    /// and kept only if the mover's king is not attacked afterwards. The live
    /// board is never touched. This works for either color, regardless of
    /// whose turn it is.
    pub fn valid_moves(&self, pos: Position) -> Option<MoveList> {
        let piece = self.board.get(pos)?;
        let mut moves = piece_moves(&self.board, pos, piece);
        moves.retain(|&m| !self.leaves_king_attacked(m, piece.color()));
        tracing::trace!(%pos, %piece, count = moves.len(), "computed valid moves");
        Some(moves)
    }

    fn leaves_king_attacked(&self, m: Move, color: Color) -> bool {
        let mut scratch = self.board.clone();
        scratch.apply(m);
        is_king_attacked(&scratch, color)
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.turn)
    }

    fn legal_moves_for(&self, color: Color) -> MoveList {
        let mut all = MoveList::new();
        for (pos, _) in self.board.pieces(color) {
            if let Some(moves) = self.valid_moves(pos) {
                all.extend_unique(&moves);
            }
        }
        all
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces(color)
            .any(|(pos, _)| self.valid_moves(pos).is_some_and(|moves| !moves.is_empty()))
    }

    /// Makes a move for the side to move.
    ///
    /// The move is rejected when the start square is empty, holds a piece of
    /// the side not to move, or the move is not among that piece's legal
    /// moves. A rejected move leaves the board and the turn unchanged.
    pub fn make_move(&mut self, mov: Move) -> Result<(), GameError> {
        if let Err(reason) = self.validate(mov) {
            tracing::debug!(%mov, %reason, turn = %self.turn, "rejected move");
            return Err(GameError::InvalidMove { mov, reason });
        }

        self.apply(mov);
        tracing::debug!(%mov, turn = %self.turn, "applied move");
        Ok(())
    }

    fn validate(&self, mov: Move) -> Result<(), InvalidMoveReason> {
        let piece = self
            .board
            .get(mov.start())
            .ok_or(InvalidMoveReason::EmptySquare)?;
        if piece.color() != self.turn {
            return Err(InvalidMoveReason::WrongTurn {
                expected: self.turn,
                found: piece.color(),
            });
        }
        match self.valid_moves(mov.start()) {
            Some(moves) if moves.contains(&mov) => Ok(()),
            _ => Err(InvalidMoveReason::NotLegal),
        }
    }

    /// Plays an already-validated move and passes the turn.
    pub(crate) fn apply(&mut self, mov: Move) {
        self.board.apply(mov);
        self.turn = self.turn.opposite();
    }

    /// Returns true if the king of `color` is attacked.
    ///
    /// A color with no king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// Returns true if `color` is in check and none of its pieces has a legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check and none of its pieces has a legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Classifies the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let color = self.turn;
        let in_check = self.is_in_check(color);
        let can_move = self.has_legal_move(color);
        match (in_check, can_move) {
            (true, true) => GameStatus::Check(color),
            (true, false) => GameStatus::Checkmate(color),
            (false, true) => GameStatus::InProgress,
            (false, false) => GameStatus::Stalemate(color),
        }
    }
}
