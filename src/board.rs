//! Reversi board state and rules.
//!
//! A [`Board`] is a plain value: applying a move returns a new board and
//! never mutates the caller's copy. Legality is computed by walking the
//! eight compass directions from the candidate cell, without placing a
//! scratch piece anywhere.

use std::fmt;

use thiserror::Error;

/// Board edge length. The rules, the feature normalization constants and
/// the starting layout all assume the standard 8x8 board.
pub const BOARD_SIZE: usize = 8;

/// Total number of cells; piece counts plus empty cells always sum to this.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Direction scan order: N, NE, E, SE, S, SW, W, NW.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// One of the two disc colors. `Black` is the engine's first color; the
/// learning agent always plays it inside the trainer and evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other color. This is the only way to get an opponent; there is
    /// no arithmetic encoding to negate.
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A board coordinate. `row` and `col` must both be below [`BOARD_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rejected move. Callers are expected to validate with
/// [`Board::legal_moves`] first; hitting this is a caller-side logic
/// defect, not a condition to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("cell {0} is already occupied")]
    Occupied(Coord),
    #[error("move at {0} captures no discs")]
    NoCapture(Coord),
}

/// Discs present on the board before the first move. Passing the layout
/// explicitly keeps multiple engines and test positions independent of
/// any ambient configuration.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    pub initial: Vec<(Coord, Player)>,
}

impl BoardConfig {
    /// The standard opening: two discs of each color placed diagonally on
    /// the four central squares.
    pub fn standard() -> BoardConfig {
        BoardConfig {
            initial: vec![
                (Coord::new(3, 3), Player::White),
                (Coord::new(3, 4), Player::Black),
                (Coord::new(4, 3), Player::Black),
                (Coord::new(4, 4), Player::White),
            ],
        }
    }
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig::standard()
    }
}

/// Piece counts for one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn count_for(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The color holding more discs, or `None` on equal counts.
    pub fn winner(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// An immutable 8x8 board snapshot.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

fn on_board(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

impl Board {
    /// An empty board with the discs named by `config` placed.
    pub fn new(config: &BoardConfig) -> Board {
        let mut board = Board::empty();
        for &(at, player) in &config.initial {
            board.cells[at.row][at.col] = Some(player);
        }
        board
    }

    /// The standard starting position.
    pub fn standard() -> Board {
        Board::new(&BoardConfig::standard())
    }

    pub fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// A copy of this board with one cell overwritten. Intended for
    /// composing test positions; gameplay goes through [`Board::apply_move`].
    pub fn with_cell(mut self, at: Coord, cell: Option<Player>) -> Board {
        self.cells[at.row][at.col] = cell;
        self
    }

    pub fn get(&self, at: Coord) -> Option<Player> {
        self.cells[at.row][at.col]
    }

    /// Length of the opponent run captured in one direction, or 0 when the
    /// run is empty, runs off the board, or ends on an empty cell.
    fn run_length(&self, player: Player, at: Coord, dir: (isize, isize)) -> usize {
        let opponent = player.opponent();
        let mut row = at.row as isize + dir.0;
        let mut col = at.col as isize + dir.1;
        let mut len = 0;
        while on_board(row, col) && self.cells[row as usize][col as usize] == Some(opponent) {
            len += 1;
            row += dir.0;
            col += dir.1;
        }
        // A run only counts when flanked by our own disc on the far side.
        if len > 0 && on_board(row, col) && self.cells[row as usize][col as usize] == Some(player)
        {
            len
        } else {
            0
        }
    }

    /// Every opponent disc that placing `player` at `at` would flip: the
    /// union of captured runs over all eight directions. Empty when the
    /// move is illegal.
    pub fn captures(&self, player: Player, at: Coord) -> Vec<Coord> {
        if self.get(at).is_some() {
            return Vec::new();
        }
        let mut flips = Vec::new();
        for &dir in &DIRECTIONS {
            let len = self.run_length(player, at, dir);
            for step in 1..=len as isize {
                flips.push(Coord::new(
                    (at.row as isize + dir.0 * step) as usize,
                    (at.col as isize + dir.1 * step) as usize,
                ));
            }
        }
        flips
    }

    /// True when `at` is empty and captures at least one run.
    pub fn is_legal(&self, player: Player, at: Coord) -> bool {
        self.get(at).is_none()
            && DIRECTIONS
                .iter()
                .any(|&dir| self.run_length(player, at, dir) > 0)
    }

    /// All legal moves for `player`, in row-major order (lexicographic by
    /// row then column). Downstream tie-breaking depends on this order.
    pub fn legal_moves(&self, player: Player) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let at = Coord::new(row, col);
                if self.is_legal(player, at) {
                    moves.push(at);
                }
            }
        }
        moves
    }

    pub fn has_any_move(&self, player: Player) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_legal(player, Coord::new(row, col)) {
                    return true;
                }
            }
        }
        false
    }

    /// A new board with `player`'s disc placed at `at` and every captured
    /// disc flipped. The receiver is left untouched.
    pub fn apply_move(&self, player: Player, at: Coord) -> Result<Board, InvalidMove> {
        if self.get(at).is_some() {
            return Err(InvalidMove::Occupied(at));
        }
        let flips = self.captures(player, at);
        if flips.is_empty() {
            return Err(InvalidMove::NoCapture(at));
        }
        let mut next = *self;
        next.cells[at.row][at.col] = Some(player);
        for flip in flips {
            next.cells[flip.row][flip.col] = Some(player);
        }
        Ok(next)
    }

    /// The game ends when the board is full or neither color can move. A
    /// single blocked color passes; that alone does not end the game.
    pub fn is_terminal(&self) -> bool {
        let score = self.score();
        if score.black + score.white == CELL_COUNT {
            return true;
        }
        !self.has_any_move(Player::Black) && !self.has_any_move(Player::White)
    }

    pub fn score(&self) -> Score {
        let mut score = Score { black: 0, white: 0 };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(Player::Black) => score.black += 1,
                    Some(Player::White) => score.white += 1,
                    None => {}
                }
            }
        }
        score
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row)?;
            for cell in cells {
                let symbol = match cell {
                    None => '.',
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
