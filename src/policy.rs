//! Epsilon-greedy linear move selection.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Coord, InvalidMove, Player};
use crate::features::{self, FeatureVector};
use crate::weights::WeightVector;

/// A selected move. `features` is `None` when the move came from the
/// exploration branch; callers that record a trajectory recompute them
/// via [`evaluate_move`].
#[derive(Clone, Copy, Debug)]
pub struct Choice {
    pub mov: Coord,
    pub features: Option<FeatureVector>,
}

fn dot(weights: &WeightVector, features: &FeatureVector) -> f64 {
    weights.iter().zip(features.iter()).map(|(w, f)| w * f).sum()
}

/// Score one candidate move: apply it, extract features of the resulting
/// board from the mover's perspective, and dot them with `weights`.
/// Fails only when the move itself is invalid.
pub fn evaluate_move(
    board: &Board,
    player: Player,
    mov: Coord,
    weights: &WeightVector,
) -> Result<(f64, FeatureVector), InvalidMove> {
    let next = board.apply_move(player, mov)?;
    let features = features::extract(&next, player);
    Ok((dot(weights, &features), features))
}

/// Pick a move for `player`, or `None` when there is no legal move and the
/// turn must pass. With probability `epsilon` a uniformly random legal
/// move is returned without features; otherwise every legal move is
/// evaluated and the strictly best score wins, ties going to the move
/// encountered first in the board's row-major enumeration order.
pub fn choose_action(
    board: &Board,
    player: Player,
    weights: &WeightVector,
    epsilon: f64,
    rng: &mut SmallRng,
) -> Option<Choice> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return None;
    }

    if rng.gen::<f64>() < epsilon {
        let mov = moves[rng.gen_range(0..moves.len())];
        return Some(Choice {
            mov,
            features: None,
        });
    }

    let mut best: Option<(f64, Choice)> = None;
    for &mov in &moves {
        // legal_moves guarantees the move applies.
        let Ok((score, features)) = evaluate_move(board, player, mov, weights) else {
            continue;
        };
        if best.as_ref().map_or(true, |(best_score, _)| score > *best_score) {
            best = Some((
                score,
                Choice {
                    mov,
                    features: Some(features),
                },
            ));
        }
    }
    best.map(|(_, choice)| choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn evaluate_move_rejects_illegal_input() {
        let board = Board::standard();
        let err = evaluate_move(&board, Player::Black, Coord::new(0, 0), &[0.0; 4]);
        assert_eq!(err, Err(InvalidMove::NoCapture(Coord::new(0, 0))));
    }

    #[test]
    fn exploitation_breaks_ties_by_enumeration_order() {
        let board = Board::standard();
        let mut rng = SmallRng::seed_from_u64(7);
        let choice = choose_action(&board, Player::Black, &[0.0; 4], 0.0, &mut rng)
            .expect("opening position has legal moves");
        assert_eq!(choice.mov, Coord::new(2, 3));
        assert!(choice.features.is_some());
    }

    #[test]
    fn exploration_returns_no_features() {
        let board = Board::standard();
        let mut rng = SmallRng::seed_from_u64(7);
        let choice = choose_action(&board, Player::Black, &[0.0; 4], 1.0, &mut rng)
            .expect("opening position has legal moves");
        assert!(choice.features.is_none());
        assert!(board.is_legal(Player::Black, choice.mov));
    }

    #[test]
    fn no_legal_move_means_pass() {
        // A lone black disc: neither color can capture anything.
        let board = Board::empty().with_cell(Coord::new(0, 0), Some(Player::Black));
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(choose_action(&board, Player::White, &[0.0; 4], 0.0, &mut rng).is_none());
    }
}
