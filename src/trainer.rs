//! Monte-Carlo self-play training.
//!
//! The agent plays Black against a uniformly random White opponent,
//! recording one feature vector per move it makes. When the game ends the
//! terminal outcome is folded into the weight vector in a single flat
//! update: every decision in the game receives identical credit for the
//! result, with no discounting. That crude credit assignment is the
//! intended behavior, not an approximation to be refined here.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, InvalidMove, Player};
use crate::features::FeatureVector;
use crate::opponents::Opponent;
use crate::policy;
use crate::weights::{WeightVector, ZERO_WEIGHTS};

#[derive(Clone, Debug)]
pub struct TrainParams {
    pub games: usize,
    pub epsilon_start: f64,
    pub epsilon_end: f64,
    pub alpha: f64,
    pub seed: u64,
}

/// Exploration rate for game `i`, linearly interpolated from
/// `epsilon_start` to `epsilon_end` over the run. A single-game run uses
/// `epsilon_start`.
pub fn epsilon_at(params: &TrainParams, i: usize) -> f64 {
    if params.games <= 1 {
        return params.epsilon_start;
    }
    let t = i as f64 / (params.games - 1) as f64;
    params.epsilon_start * (1.0 - t) + params.epsilon_end * t
}

/// One flat Monte-Carlo update: `w[i] += alpha * reward * f[i]` for every
/// feature vector in the trajectory.
pub fn update_weights(
    weights: &mut WeightVector,
    trajectory: &[FeatureVector],
    reward: f64,
    alpha: f64,
) {
    for features in trajectory {
        for (w, f) in weights.iter_mut().zip(features.iter()) {
            *w += alpha * reward * f;
        }
    }
}

/// Terminal outcome from the agent's (Black's) perspective.
fn reward(board: &Board) -> f64 {
    match board.score().winner() {
        Some(Player::Black) => 1.0,
        Some(Player::White) => -1.0,
        None => 0.0,
    }
}

/// Play one training game and apply the weight update. Returns the reward.
pub fn play_training_game(
    weights: &mut WeightVector,
    epsilon: f64,
    alpha: f64,
    rng: &mut SmallRng,
) -> Result<f64, InvalidMove> {
    let mut board = Board::standard();
    let mut to_move = Player::Black;
    let mut trajectory: Vec<FeatureVector> = Vec::new();

    while !board.is_terminal() {
        match to_move {
            Player::Black => {
                if let Some(choice) = policy::choose_action(&board, to_move, weights, epsilon, rng)
                {
                    // Exploration skips scoring; recompute so every
                    // recorded move carries its feature vector.
                    let features = match choice.features {
                        Some(features) => features,
                        None => policy::evaluate_move(&board, to_move, choice.mov, weights)?.1,
                    };
                    board = board.apply_move(to_move, choice.mov)?;
                    trajectory.push(features);
                }
            }
            Player::White => {
                if let Some(mov) = Opponent::Random.select(&board, to_move, rng) {
                    board = board.apply_move(to_move, mov)?;
                }
            }
        }
        // A player without a move passes; the turn transfers either way.
        to_move = to_move.opponent();
    }

    let reward = reward(&board);
    update_weights(weights, &trajectory, reward, alpha);
    Ok(reward)
}

/// Run `params.games` training games, continuing from `weights`. Weight
/// updates are applied synchronously between games; the run owns a single
/// RNG seeded from `params.seed`.
pub fn train(weights: &mut WeightVector, params: &TrainParams) -> Result<(), InvalidMove> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    for i in 0..params.games {
        let epsilon = epsilon_at(params, i);
        let reward = play_training_game(weights, epsilon, params.alpha, &mut rng)?;
        debug!("game {i}: epsilon={epsilon:.3} reward={reward}");
    }
    Ok(())
}

/// A fresh training run starting from the zero vector.
pub fn train_run(params: &TrainParams) -> Result<WeightVector, InvalidMove> {
    let mut weights = ZERO_WEIGHTS;
    train(&mut weights, params)?;
    Ok(weights)
}
