//! Fixed baseline opponents.
//!
//! Both are non-learning selection rules: `Random` doubles as the training
//! sparring partner, and both serve as evaluation baselines.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Coord, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Greedy,
}

impl Opponent {
    /// Column-name prefix in the evaluation log.
    pub fn label(self) -> &'static str {
        match self {
            Opponent::Random => "rand",
            Opponent::Greedy => "greedy",
        }
    }

    /// Pick a move for `player`, or `None` to pass.
    pub fn select(self, board: &Board, player: Player, rng: &mut SmallRng) -> Option<Coord> {
        match self {
            Opponent::Random => random_move(board, player, rng),
            Opponent::Greedy => greedy_move(board, player),
        }
    }
}

fn random_move(board: &Board, player: Player, rng: &mut SmallRng) -> Option<Coord> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}

/// The move maximizing the mover's own piece-count differential after the
/// move. Strict `>` keeps the first-encountered move on ties, matching the
/// board's row-major enumeration order.
fn greedy_move(board: &Board, player: Player) -> Option<Coord> {
    let opponent = player.opponent();
    let mut best: Option<(i64, Coord)> = None;
    for mov in board.legal_moves(player) {
        let Ok(next) = board.apply_move(player, mov) else {
            continue;
        };
        let score = next.score();
        let diff = score.count_for(player) as i64 - score.count_for(opponent) as i64;
        if best.map_or(true, |(best_diff, _)| diff > best_diff) {
            best = Some((diff, mov));
        }
    }
    best.map(|(_, mov)| mov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn greedy_prefers_larger_capture() {
        // Black at (0,2) flips one disc; black at (4,1) flips two.
        let board = Board::empty()
            .with_cell(Coord::new(0, 0), Some(Player::Black))
            .with_cell(Coord::new(0, 1), Some(Player::White))
            .with_cell(Coord::new(4, 2), Some(Player::White))
            .with_cell(Coord::new(4, 3), Some(Player::White))
            .with_cell(Coord::new(4, 4), Some(Player::Black));
        let mov = greedy_move(&board, Player::Black).expect("black has moves");
        assert_eq!(mov, Coord::new(4, 1));
    }

    #[test]
    fn greedy_ties_go_to_first_enumerated() {
        let mov = greedy_move(&Board::standard(), Player::Black).expect("opening moves exist");
        // All four opening moves flip exactly one disc.
        assert_eq!(mov, Coord::new(2, 3));
    }
}
