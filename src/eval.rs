//! Frozen-policy evaluation against the fixed baselines.
//!
//! No weight updates happen here. Game `i` of a run plays with its own
//! RNG seeded as `seed + i`, so a run is reproducible for a given
//! `(weights, seed, games)` triple and the games can be fanned out across
//! threads without changing the result.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::board::{Board, InvalidMove, Player};
use crate::opponents::Opponent;
use crate::policy;
use crate::weights::WeightVector;

#[derive(Clone, Debug)]
pub struct EvalParams {
    pub games: usize,
    /// Exploration rate while evaluating; 0 for pure exploitation.
    pub epsilon: f64,
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EvalReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f64,
}

/// One evaluation game: the frozen agent as Black versus `opponent`.
/// Returns the terminal reward from the agent's perspective.
fn play_frozen_game(
    weights: &WeightVector,
    opponent: Opponent,
    epsilon: f64,
    rng: &mut SmallRng,
) -> Result<f64, InvalidMove> {
    let mut board = Board::standard();
    let mut to_move = Player::Black;

    while !board.is_terminal() {
        match to_move {
            Player::Black => {
                if let Some(choice) = policy::choose_action(&board, to_move, weights, epsilon, rng)
                {
                    board = board.apply_move(to_move, choice.mov)?;
                }
            }
            Player::White => {
                if let Some(mov) = opponent.select(&board, to_move, rng) {
                    board = board.apply_move(to_move, mov)?;
                }
            }
        }
        to_move = to_move.opponent();
    }

    Ok(match board.score().winner() {
        Some(Player::Black) => 1.0,
        Some(Player::White) => -1.0,
        None => 0.0,
    })
}

/// Evaluate `weights` over `params.games` games against `opponent`.
/// Games run in parallel; each one reseeds its own RNG, so the tally is
/// identical to sequential play.
pub fn evaluate(
    weights: &WeightVector,
    opponent: Opponent,
    params: &EvalParams,
) -> Result<EvalReport, InvalidMove> {
    let rewards = (0..params.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(params.seed.wrapping_add(i as u64));
            play_frozen_game(weights, opponent, params.epsilon, &mut rng)
        })
        .collect::<Result<Vec<f64>, InvalidMove>>()?;

    let mut report = EvalReport {
        games: params.games,
        wins: 0,
        losses: 0,
        draws: 0,
        win_rate: 0.0,
    };
    for r in rewards {
        if r > 0.0 {
            report.wins += 1;
        } else if r < 0.0 {
            report.losses += 1;
        } else {
            report.draws += 1;
        }
    }
    if report.games > 0 {
        report.win_rate = report.wins as f64 / report.games as f64;
    }
    Ok(report)
}
