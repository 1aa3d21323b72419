//! Play Reversi against the trained agent in the terminal.
//!
//! The agent always reasons from the engine's first color (Black), so when
//! the human takes Black the display board is color-mirrored before the
//! policy is consulted. Moves are entered in algebraic form (`d3`:
//! column letter, then rank), the front end's own convention, and
//! translated to engine coordinates at the boundary.

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

use flipbot::board::{Board, Coord, Player, BOARD_SIZE};
use flipbot::policy;
use flipbot::weights;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Reversi against the linear RL agent", long_about = None)]
struct Args {
    /// Path to the weights file (JSON array of 4 floats)
    #[arg(long, default_value = "weights.json")]
    weights: PathBuf,

    /// Your color: 'b' for black (you move first) or 'w' for white
    #[arg(long, default_value = "b")]
    color: String,

    /// Agent exploration rate; 0 plays the greedy policy move every turn
    #[arg(long, default_value_t = 0.05)]
    epsilon: f64,

    /// Seed for the agent's exploration randomness
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_color(color_str: &str) -> Result<Player> {
    match color_str.to_lowercase().as_str() {
        "b" | "black" => Ok(Player::Black),
        "w" | "white" => Ok(Player::White),
        _ => anyhow::bail!("Invalid color: use 'b' or 'w'"),
    }
}

/// Translate the front end's algebraic notation ("d3") into an engine
/// coordinate.
fn parse_square(input: &str) -> Option<Coord> {
    let bytes = input.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = (bytes[0].to_ascii_lowercase() as i32) - ('a' as i32);
    let row = (bytes[1] as i32) - ('1' as i32);
    if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
        Some(Coord::new(row as usize, col as usize))
    } else {
        None
    }
}

fn format_square(at: Coord) -> String {
    format!("{}{}", (b'a' + at.col as u8) as char, at.row + 1)
}

/// The front end's own rendering: letters for columns, ranks for rows.
fn print_board(board: &Board) {
    println!("\n  a b c d e f g h");
    for row in 0..BOARD_SIZE {
        print!("{}", row + 1);
        for col in 0..BOARD_SIZE {
            let symbol = match board.get(Coord::new(row, col)) {
                None => '.',
                Some(Player::Black) => 'B',
                Some(Player::White) => 'W',
            };
            print!(" {}", symbol);
        }
        println!();
    }
}

/// Swap the colors of every disc. The agent is trained as Black; when it
/// plays White at the table, it is handed the mirrored board instead.
fn mirrored(board: &Board) -> Board {
    let mut out = Board::empty();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let at = Coord::new(row, col);
            out = out.with_cell(at, board.get(at).map(Player::opponent));
        }
    }
    out
}

/// Prompt until the user enters a legal square. `None` means quit.
fn get_human_move(board: &Board, player: Player) -> Result<Option<Coord>> {
    let legal = board.legal_moves(player);
    loop {
        print!("Your move (e.g. d3, or 'hints'/'quit'): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input == "quit" {
            return Ok(None);
        }
        if input == "hints" {
            let squares: Vec<String> = legal.iter().map(|&m| format_square(m)).collect();
            println!("Legal moves: {}", squares.join(" "));
            continue;
        }
        match parse_square(input) {
            Some(at) if legal.contains(&at) => return Ok(Some(at)),
            Some(_) => println!("Illegal move! Type 'hints' to list legal moves."),
            None => println!("Invalid square! Use a column letter and rank, like 'd3'."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human_color = parse_color(&args.color)?;
    let agent_color = human_color.opponent();
    let agent_weights = weights::load_or_default(&args.weights);
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    println!("Reversi: you play {}, the agent plays {}.", human_color, agent_color);
    println!("Agent weights: {:?} (epsilon {})", agent_weights, args.epsilon);

    let mut board = Board::standard();
    let mut to_move = Player::Black;

    while !board.is_terminal() {
        print_board(&board);
        let score = board.score();
        println!("Score: Black {} / White {}. {} to move.", score.black, score.white, to_move);

        if !board.has_any_move(to_move) {
            println!("{} has no legal move and passes.", to_move);
            to_move = to_move.opponent();
            continue;
        }

        if to_move == human_color {
            let Some(mov) = get_human_move(&board, to_move)? else {
                println!("Thanks for playing!");
                return Ok(());
            };
            board = board.apply_move(to_move, mov)?;
        } else {
            // The policy always sees itself as Black.
            let agent_view = if agent_color == Player::Black {
                board
            } else {
                mirrored(&board)
            };
            let choice =
                policy::choose_action(&agent_view, Player::Black, &agent_weights, args.epsilon, &mut rng);
            match choice {
                Some(choice) => {
                    println!("Agent plays: {}", format_square(choice.mov));
                    board = board.apply_move(to_move, choice.mov)?;
                }
                None => println!("Agent passes."),
            }
        }
        to_move = to_move.opponent();
    }

    print_board(&board);
    let score = board.score();
    println!("\nFinal score: Black {} / White {}.", score.black, score.white);
    match score.winner() {
        Some(winner) if winner == human_color => println!("You win!"),
        Some(_) => println!("The agent wins!"),
        None => println!("It's a draw!"),
    }

    Ok(())
}
