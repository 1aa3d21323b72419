//! Training entry point: interleaved train/evaluate/log cycles.

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;

use flipbot::eval::{evaluate, EvalParams};
use flipbot::opponents::Opponent;
use flipbot::stats::{write_stats, Checkpoint};
use flipbot::trainer::{epsilon_at, train, TrainParams};
use flipbot::weights;

#[derive(Parser, Debug)]
#[command(name = "flipbot-train", about = "Train the agent by self-play and log checkpoint evaluations")]
struct Args {
    /// Total number of training games
    #[arg(long, default_value_t = 4000)]
    games: usize,

    /// Evaluate and log every this many training games
    #[arg(long, default_value_t = 250)]
    checkpoint: usize,

    /// Frozen-policy games per baseline at each checkpoint
    #[arg(long, default_value_t = 2000)]
    eval_games: usize,

    /// Exploration rate at the start of the run
    #[arg(long, default_value_t = 1.0)]
    epsilon_start: f64,

    /// Exploration rate at the end of the run
    #[arg(long, default_value_t = 0.1)]
    epsilon_end: f64,

    /// Exploration rate during evaluation (0 = pure exploitation)
    #[arg(long, default_value_t = 0.0)]
    eval_epsilon: f64,

    /// Learning rate
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Training seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Base seed for evaluation games (game i reseeds with seed + i)
    #[arg(long, default_value_t = 0)]
    eval_seed: u64,

    /// Where to persist the learned weights
    #[arg(long, default_value = "weights.json")]
    weights: PathBuf,

    /// Where to write the checkpoint evaluation log
    #[arg(long, default_value = "stats.csv")]
    stats: PathBuf,

    /// Continue from the existing weights file instead of starting from zeros
    #[arg(long)]
    resume: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.games > 0, "--games must be positive");
    anyhow::ensure!(args.checkpoint > 0, "--checkpoint must be positive");
    anyhow::ensure!(args.eval_games > 0, "--eval-games must be positive");

    let mut learned = if args.resume {
        weights::load_or_default(&args.weights)
    } else {
        weights::ZERO_WEIGHTS
    };

    let eval_params = EvalParams {
        games: args.eval_games,
        epsilon: args.eval_epsilon,
        seed: args.eval_seed,
    };

    // Untrained reference point before any learning happens.
    let base_random = evaluate(&learned, Opponent::Random, &eval_params)?;
    let base_greedy = evaluate(&learned, Opponent::Greedy, &eval_params)?;
    eprintln!(
        "baseline: vs random win_rate={:.3}, vs greedy win_rate={:.3}",
        base_random.win_rate, base_greedy.win_rate
    );

    // One global epsilon schedule over the whole run; each block trains on
    // its slice of it.
    let schedule = TrainParams {
        games: args.games,
        epsilon_start: args.epsilon_start,
        epsilon_end: args.epsilon_end,
        alpha: args.alpha,
        seed: args.seed,
    };

    let mut rows: Vec<Checkpoint> = Vec::new();
    let mut trained_games = 0usize;
    let progress = ProgressBar::new(args.games as u64);

    while trained_games < args.games {
        let block = args.checkpoint.min(args.games - trained_games);
        let block_params = TrainParams {
            games: block,
            epsilon_start: epsilon_at(&schedule, trained_games),
            epsilon_end: epsilon_at(&schedule, trained_games + block - 1),
            alpha: args.alpha,
            seed: args.seed.wrapping_add(trained_games as u64),
        };
        train(&mut learned, &block_params)?;
        trained_games += block;
        progress.inc(block as u64);

        let random = evaluate(&learned, Opponent::Random, &eval_params)?;
        let greedy = evaluate(&learned, Opponent::Greedy, &eval_params)?;
        rows.push(Checkpoint {
            trained_games,
            random,
            greedy,
        });
        write_stats(&args.stats, &rows)?;
        weights::save(&args.weights, &learned)?;
        progress.println(format!(
            "after {} games: vs random win_rate={:.3}, vs greedy win_rate={:.3}",
            trained_games, random.win_rate, greedy.win_rate
        ));
    }

    progress.finish();
    println!("final weights: {:?}", learned);
    println!("weights written to {}", args.weights.display());
    println!("evaluation log written to {}", args.stats.display());
    Ok(())
}
