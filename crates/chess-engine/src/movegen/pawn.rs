//! Pawn move generation: pushes, captures and promotions.

use super::MoveList;
use crate::Board;
use chess_core::{Color, Move, PieceType, Position};

/// Adds the pseudo-legal moves of a `color` pawn standing on `from`.
///
/// A pawn advances one row if that square is empty, two rows from its start
/// row if both squares ahead are empty, and captures one row ahead on either
/// adjacent column. En passant is not generated.
pub fn generate(board: &Board, from: Position, color: Color, moves: &mut MoveList) {
    let direction = color.pawn_direction();

    if let Some(one) = from.offset(direction, 0) {
        if board.get(one).is_none() {
            add_pawn_move(moves, from, one, color);

            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(direction, 0) {
                    if board.get(two).is_none() {
                        add_pawn_move(moves, from, two, color);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(direction, side) else {
            continue;
        };
        if board.get(target).is_some_and(|piece| piece.color() != color) {
            add_pawn_move(moves, from, target, color);
        }
    }
}

/// Adds a pawn move, expanding it into the four promotion choices when it
/// lands on the promotion row.
fn add_pawn_move(moves: &mut MoveList, from: Position, to: Position, color: Color) {
    if to.row() == color.promotion_row() {
        for piece in PieceType::PROMOTIONS {
            moves.insert(Move::promoting(from, to, piece));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn pawn_moves(board: &Board, from: &str, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        generate(board, pos(from), color, &mut moves);
        moves
    }

    fn put(board: &mut Board, at: &str, color: Color, kind: PieceType) {
        board.set(pos(at), Some(Piece::new(color, kind)));
    }

    #[test]
    fn single_and_double_push_from_start() {
        let moves = pawn_moves(&Board::standard(), "e2", Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("e2"), pos("e3"))));
        assert!(moves.contains(&Move::new(pos("e2"), pos("e4"))));
    }

    #[test]
    fn black_pushes_downwards() {
        let moves = pawn_moves(&Board::standard(), "d7", Color::Black);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("d7"), pos("d6"))));
        assert!(moves.contains(&Move::new(pos("d7"), pos("d5"))));
    }

    #[test]
    fn no_double_push_off_start_row() {
        let mut board = Board::empty();
        put(&mut board, "e3", Color::White, PieceType::Pawn);
        let moves = pawn_moves(&board, "e3", Color::White);
        assert_eq!(moves.as_slice(), &[Move::new(pos("e3"), pos("e4"))]);
    }

    #[test]
    fn double_push_needs_empty_intermediate_square() {
        let mut board = Board::empty();
        put(&mut board, "c2", Color::White, PieceType::Pawn);
        put(&mut board, "c3", Color::Black, PieceType::Knight);
        assert!(pawn_moves(&board, "c2", Color::White).is_empty());
    }

    #[test]
    fn double_push_needs_empty_destination() {
        let mut board = Board::empty();
        put(&mut board, "c7", Color::Black, PieceType::Pawn);
        put(&mut board, "c5", Color::White, PieceType::Bishop);
        let moves = pawn_moves(&board, "c7", Color::Black);
        assert_eq!(moves.as_slice(), &[Move::new(pos("c7"), pos("c6"))]);
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Pawn);
        put(&mut board, "d5", Color::Black, PieceType::Pawn);
        assert!(pawn_moves(&board, "d4", Color::White).is_empty());
    }

    #[test]
    fn diagonal_captures_only_enemies() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Pawn);
        put(&mut board, "c5", Color::Black, PieceType::Rook);
        put(&mut board, "e5", Color::White, PieceType::Rook);
        let moves = pawn_moves(&board, "d4", Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("d4"), pos("d5"))));
        assert!(moves.contains(&Move::new(pos("d4"), pos("c5"))));
        assert!(!moves.contains(&Move::new(pos("d4"), pos("e5"))));
    }

    #[test]
    fn edge_pawn_has_one_capture_side() {
        let mut board = Board::empty();
        put(&mut board, "h6", Color::Black, PieceType::Pawn);
        put(&mut board, "g5", Color::White, PieceType::Knight);
        let moves = pawn_moves(&board, "h6", Color::Black);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("h6"), pos("g5"))));
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::empty();
        put(&mut board, "e7", Color::White, PieceType::Pawn);
        let moves = pawn_moves(&board, "e7", Color::White);
        assert_eq!(moves.len(), 4);
        for piece in PieceType::PROMOTIONS {
            assert!(moves.contains(&Move::promoting(pos("e7"), pos("e8"), piece)));
        }
        assert!(!moves.contains(&Move::new(pos("e7"), pos("e8"))));
    }

    #[test]
    fn capture_promotion() {
        let mut board = Board::empty();
        put(&mut board, "b2", Color::Black, PieceType::Pawn);
        put(&mut board, "b1", Color::White, PieceType::Knight);
        put(&mut board, "a1", Color::White, PieceType::Rook);
        let moves = pawn_moves(&board, "b2", Color::Black);
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|m| m.end() == pos("a1") && m.promotion().is_some()));
    }
}
