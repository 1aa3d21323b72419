use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use flipbot::board::{Board, Coord, InvalidMove, Player, Score, BOARD_SIZE, CELL_COUNT};
use flipbot::opponents::Opponent;

fn empty_cells(board: &Board) -> usize {
    let mut empties = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(Coord::new(row, col)).is_none() {
                empties += 1;
            }
        }
    }
    empties
}

#[test]
fn opening_capture_flips_exactly_one_disc() {
    let board = Board::standard();
    let next = board
        .apply_move(Player::Black, Coord::new(2, 3))
        .expect("(2,3) is a legal opening move");
    assert_eq!(next.get(Coord::new(2, 3)), Some(Player::Black));
    assert_eq!(next.get(Coord::new(3, 3)), Some(Player::Black));
    assert_eq!(next.score(), Score { black: 4, white: 1 });
}

#[test]
fn opening_moves_enumerate_in_row_major_order() {
    let moves = Board::standard().legal_moves(Player::Black);
    assert_eq!(
        moves,
        vec![
            Coord::new(2, 3),
            Coord::new(3, 2),
            Coord::new(4, 5),
            Coord::new(5, 4),
        ]
    );
}

#[test]
fn occupied_cell_is_rejected() {
    let board = Board::standard();
    let target = Coord::new(3, 3);
    assert_eq!(
        board.apply_move(Player::Black, target),
        Err(InvalidMove::Occupied(target))
    );
}

#[test]
fn captureless_move_is_rejected() {
    let board = Board::standard();
    let target = Coord::new(0, 0);
    assert_eq!(
        board.apply_move(Player::Black, target),
        Err(InvalidMove::NoCapture(target))
    );
}

#[test]
fn apply_move_leaves_the_original_board_untouched() {
    let board = Board::standard();
    let _ = board
        .apply_move(Player::Black, Coord::new(2, 3))
        .expect("legal move");
    assert_eq!(board.get(Coord::new(2, 3)), None);
    assert_eq!(board.score(), Score { black: 2, white: 2 });
}

#[test]
fn capture_resolves_across_multiple_directions() {
    // B W _ W B in row 0: playing the gap flips both white discs.
    let board = Board::empty()
        .with_cell(Coord::new(0, 0), Some(Player::Black))
        .with_cell(Coord::new(0, 1), Some(Player::White))
        .with_cell(Coord::new(0, 3), Some(Player::White))
        .with_cell(Coord::new(0, 4), Some(Player::Black));
    let next = board
        .apply_move(Player::Black, Coord::new(0, 2))
        .expect("the gap captures both runs");
    assert_eq!(next.score(), Score { black: 5, white: 0 });
}

#[test]
fn no_moves_for_either_color_is_terminal_despite_empties() {
    // A lone disc: no opponent discs anywhere, so nobody can capture.
    let board = Board::empty().with_cell(Coord::new(0, 0), Some(Player::Black));
    assert!(!board.has_any_move(Player::Black));
    assert!(!board.has_any_move(Player::White));
    assert!(board.is_terminal());
    assert_eq!(empty_cells(&board), CELL_COUNT - 1);
}

#[test]
fn one_blocked_color_passes_instead_of_ending_the_game() {
    // Black flanks the lone white disc from (0,2); white has no reply.
    let board = Board::empty()
        .with_cell(Coord::new(0, 0), Some(Player::Black))
        .with_cell(Coord::new(0, 1), Some(Player::White));
    assert!(board.has_any_move(Player::Black));
    assert!(!board.has_any_move(Player::White));
    assert!(board.legal_moves(Player::White).is_empty());
    assert!(!board.is_terminal());
}

#[test]
fn full_board_is_terminal() {
    let mut board = Board::empty();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let color = if (row + col) % 2 == 0 {
                Player::Black
            } else {
                Player::White
            };
            board = board.with_cell(Coord::new(row, col), Some(color));
        }
    }
    assert!(board.is_terminal());
    assert_eq!(empty_cells(&board), 0);
}

#[test]
fn counts_sum_to_the_cell_total_in_every_reachable_position() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::standard();
    let mut to_move = Player::Black;
    while !board.is_terminal() {
        let score = board.score();
        assert_eq!(score.black + score.white + empty_cells(&board), CELL_COUNT);
        // legal_moves and has_any_move must agree everywhere.
        assert_eq!(
            board.legal_moves(to_move).is_empty(),
            !board.has_any_move(to_move)
        );
        if let Some(mov) = Opponent::Random.select(&board, to_move, &mut rng) {
            board = board.apply_move(to_move, mov).expect("selected move is legal");
        }
        to_move = to_move.opponent();
    }
    let score = board.score();
    assert_eq!(score.black + score.white + empty_cells(&board), CELL_COUNT);
    // Terminal means the board is full or both colors are blocked.
    assert!(
        empty_cells(&board) == 0
            || (!board.has_any_move(Player::Black) && !board.has_any_move(Player::White))
    );
}
