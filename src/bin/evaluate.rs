//! Frozen-policy evaluation of a saved weight vector.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use flipbot::eval::{evaluate, EvalParams, EvalReport};
use flipbot::opponents::Opponent;
use flipbot::weights;

#[derive(Parser, Debug)]
#[command(name = "flipbot-evaluate", about = "Evaluate a weight vector against the fixed baselines")]
struct Args {
    /// Path to the weights file (JSON array of 4 floats)
    #[arg(long, default_value = "weights.json")]
    weights: PathBuf,

    /// Games to play against each baseline
    #[arg(long, default_value_t = 2000)]
    games: usize,

    /// Exploration rate during evaluation (0 = pure exploitation)
    #[arg(long, default_value_t = 0.0)]
    epsilon: f64,

    /// Base seed; game i reseeds with seed + i for reproducibility
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Optional: write the summary as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn print_report(opponent: Opponent, report: &EvalReport) {
    println!(
        "vs {}: games={} wins={} losses={} draws={} win_rate={:.3}",
        opponent.label(),
        report.games,
        report.wins,
        report.losses,
        report.draws,
        report.win_rate
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.games > 0, "--games must be positive");

    let learned = weights::load_or_default(&args.weights);
    let params = EvalParams {
        games: args.games,
        epsilon: args.epsilon,
        seed: args.seed,
    };

    let random = evaluate(&learned, Opponent::Random, &params)?;
    let greedy = evaluate(&learned, Opponent::Greedy, &params)?;

    println!("weights: {:?}", learned);
    print_report(Opponent::Random, &random);
    print_report(Opponent::Greedy, &greedy);

    if let Some(path) = args.json_out.as_deref() {
        let payload = serde_json::json!({
            "weights": learned,
            "games": args.games,
            "epsilon": args.epsilon,
            "seed": args.seed,
            "random": random,
            "greedy": greedy,
        });
        if let Err(e) = std::fs::write(path, serde_json::to_string_pretty(&payload)?) {
            eprintln!("warn: failed to write json_out: {}", e);
        }
    }

    Ok(())
}
