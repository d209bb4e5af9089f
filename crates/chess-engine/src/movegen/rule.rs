//! Direction-based move generation for every piece except the pawn.

use super::MoveList;
use crate::Board;
use chess_core::{Color, Move, PieceType, Position};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ADJACENT: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A movement pattern: a set of (row, column) directions and whether the
/// piece may keep walking along them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRule {
    sliding: bool,
    directions: &'static [(i8, i8)],
}

static BISHOP: MovementRule = MovementRule::new(true, &DIAGONALS);
static ROOK: MovementRule = MovementRule::new(true, &ORTHOGONALS);
static QUEEN: MovementRule = MovementRule::new(true, &ADJACENT);
static KNIGHT: MovementRule = MovementRule::new(false, &KNIGHT_JUMPS);
static KING: MovementRule = MovementRule::new(false, &ADJACENT);

impl MovementRule {
    pub const fn new(sliding: bool, directions: &'static [(i8, i8)]) -> Self {
        MovementRule {
            sliding,
            directions,
        }
    }

    /// Returns the rule for a piece type, or `None` for pawns, which have
    /// their own generator.
    pub fn for_piece(kind: PieceType) -> Option<&'static MovementRule> {
        match kind {
            PieceType::Bishop => Some(&BISHOP),
            PieceType::Rook => Some(&ROOK),
            PieceType::Queen => Some(&QUEEN),
            PieceType::Knight => Some(&KNIGHT),
            PieceType::King => Some(&KING),
            PieceType::Pawn => None,
        }
    }

    #[inline]
    pub const fn is_sliding(&self) -> bool {
        self.sliding
    }

    #[inline]
    pub const fn directions(&self) -> &'static [(i8, i8)] {
        self.directions
    }

    /// Adds the pseudo-legal moves of a `color` piece standing on `from`.
    ///
    /// Each direction is walked until it leaves the board or hits a piece.
    /// An enemy piece is capturable; a friendly one is not. Either way the
    /// walk stops there. Stepping rules take at most one step per direction.
    pub fn generate(&self, board: &Board, from: Position, color: Color, moves: &mut MoveList) {
        for &(dr, dc) in self.directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match board.get(to) {
                    None => moves.insert(Move::new(from, to)),
                    Some(target) => {
                        if target.color() != color {
                            moves.insert(Move::new(from, to));
                        }
                        break;
                    }
                }
                if !self.sliding {
                    break;
                }
                current = to;
            }
        }
    }
}
