//! Leaf-node counting over the legal-move tree of a [`Game`].
//!
//! Every node is a cloned game with one more move applied, so the counts
//! exercise the legality filter as well as the generators.

use crate::Game;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = game.clone();
        next.apply(*m);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Splits the `depth` count by root move, sorted by coordinate notation.
///
/// Each entry counts the leaves below that root move, so the entries sum to
/// `perft(game, depth)`.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    let moves = game.legal_moves();
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = game.clone();
        next.apply(*m);
        let nodes = if depth > 1 {
            perft(&next, depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // Castling and en passant cannot occur within four plies of the start,
    // so the standard reference counts apply.
    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Game::new(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Game::new(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Game::new(), 3), 8_902);
    }

    #[test]
    #[ignore = "slow in debug builds"]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Game::new(), 4), 197_281);
    }

    #[test]
    fn perft_divide_works() {
        let results = perft_divide(&Game::new(), 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let game = Game::new();
        let total: u64 = perft_divide(&game, 3).iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&game, 3));
    }
}
