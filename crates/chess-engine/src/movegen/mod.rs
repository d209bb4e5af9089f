//! Move generation.
//!
//! This module produces pseudo-legal moves: moves that follow a piece's
//! movement pattern and respect board occupancy, but may still leave the
//! mover's own king in check. Legality filtering lives in [`Game`](crate::Game).

mod pawn;
pub mod perft;
mod rule;

use crate::Board;
use chess_core::{Color, Move, Piece, Position};

pub use rule::MovementRule;

/// A list of moves without duplicates when filled through [`MoveList::insert`].
///
/// A single piece has at most 27 moves (a centralized queen), so the list
/// reserves that much up front.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Capacity reserved by [`MoveList::new`].
    pub const PIECE_CAPACITY: usize = 27;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::PIECE_CAPACITY),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Adds a move unless an equal move is already present.
    #[inline]
    pub fn insert(&mut self, m: Move) {
        if !self.contains(&m) {
            self.moves.push(m);
        }
    }

    /// Returns true if the list holds a move equal to `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }

    /// Appends every move of `other` that is not already present.
    pub fn extend_unique(&mut self, other: &MoveList) {
        for m in other {
            self.insert(*m);
        }
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for m in iter {
            list.insert(m);
        }
        list
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the pseudo-legal moves of `piece` standing on `from`.
///
/// Pawns use their own generator; every other piece type is driven by its
/// [`MovementRule`].
pub fn piece_moves(board: &Board, from: Position, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    match MovementRule::for_piece(piece.kind()) {
        Some(rule) => rule.generate(board, from, piece.color(), &mut moves),
        None => pawn::generate(board, from, piece.color(), &mut moves),
    }
    moves
}

/// Returns true if the king of `king_color` is attacked.
///
/// The king is attacked when it stands on the destination of some opposing
/// piece's pseudo-legal move. A side without a king on the board is never in
/// check. Attackers use pseudo-legal moves only: legality filtering calls this
/// function, so it must not filter in turn.
pub fn is_king_attacked(board: &Board, king_color: Color) -> bool {
    let Some(king) = board.king_position(king_color) else {
        return false;
    };
    board
        .pieces(king_color.opposite())
        .any(|(from, piece)| piece_moves(board, from, piece).iter().any(|m| m.end() == king))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceType;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(pos("e2"), pos("e4"));
        let m2 = Move::new(pos("d2"), pos("d4"));

        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
    }

    #[test]
    fn movelist_insert_deduplicates() {
        let mut list = MoveList::new();
        let m = Move::new(pos("g1"), pos("f3"));
        list.insert(m);
        list.insert(m);
        assert_eq!(list.len(), 1);

        let collected: MoveList = [m, m, Move::new(pos("g1"), pos("h3"))].into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn movelist_clear() {
        let mut list = MoveList::new();
        list.push(Move::new(pos("e2"), pos("e4")));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn movelist_retain() {
        let mut list = MoveList::new();
        list.push(Move::new(pos("e2"), pos("e3")));
        list.push(Move::new(pos("e2"), pos("e4")));
        list.retain(|m| m.end().row() == 4);
        assert_eq!(list.as_slice(), &[Move::new(pos("e2"), pos("e4"))]);
    }

    #[test]
    fn piece_moves_dispatches_by_type() {
        let board = Board::standard();
        let knight = board.get(pos("g1")).unwrap();
        assert_eq!(piece_moves(&board, pos("g1"), knight).len(), 2);
        let pawn = board.get(pos("a7")).unwrap();
        assert_eq!(piece_moves(&board, pos("a7"), pawn).len(), 2);
        let rook = board.get(pos("a1")).unwrap();
        assert!(piece_moves(&board, pos("a1"), rook).is_empty());
    }

    #[test]
    fn startpos_has_twenty_pseudo_legal_moves() {
        let board = Board::standard();
        let total: usize = board
            .pieces(Color::White)
            .map(|(from, piece)| piece_moves(&board, from, piece).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn is_king_attacked_startpos() {
        let board = Board::standard();
        assert!(!is_king_attacked(&board, Color::White));
        assert!(!is_king_attacked(&board, Color::Black));
    }

    #[test]
    fn king_in_check_from_slider() {
        let mut board = Board::empty();
        board.set(pos("e1"), Some(Piece::new(Color::White, PieceType::King)));
        board.set(pos("e8"), Some(Piece::new(Color::Black, PieceType::Rook)));
        assert!(is_king_attacked(&board, Color::White));

        board.set(pos("e4"), Some(Piece::new(Color::White, PieceType::Knight)));
        assert!(!is_king_attacked(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_diagonally_only() {
        let mut board = Board::empty();
        board.set(pos("e4"), Some(Piece::new(Color::White, PieceType::King)));
        board.set(pos("e5"), Some(Piece::new(Color::Black, PieceType::Pawn)));
        assert!(!is_king_attacked(&board, Color::White));

        board.set(pos("f5"), Some(Piece::new(Color::Black, PieceType::Pawn)));
        assert!(is_king_attacked(&board, Color::White));
    }

    #[test]
    fn missing_king_is_never_attacked() {
        let mut board = Board::empty();
        board.set(pos("e4"), Some(Piece::new(Color::Black, PieceType::Queen)));
        assert!(!is_king_attacked(&board, Color::White));
    }
}
