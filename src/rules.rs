//! Win and end-of-game detection

use crate::board::{Board, Cell, Piece};
use crate::{HEIGHT, WIDTH, WINDOW_LENGTH};

/// Row and column steps for the four line directions: horizontal,
/// vertical, diagonal `\` and diagonal `/`
static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A run of consecutive cells along one line of the board
pub type Window = [Cell; WINDOW_LENGTH];

/// Reads the window starting at `(row, column)` and stepping by
/// `(row_step, column_step)`, or `None` if it would leave the board
fn window_at(
    board: &Board,
    row: usize,
    column: usize,
    row_step: isize,
    column_step: isize,
) -> Option<Window> {
    let span = WINDOW_LENGTH as isize - 1;
    let last_row = row as isize + row_step * span;
    let last_column = column as isize + column_step * span;
    if last_row < 0
        || last_row >= HEIGHT as isize
        || last_column < 0
        || last_column >= WIDTH as isize
    {
        return None;
    }

    let mut window = [Cell::Empty; WINDOW_LENGTH];
    for (i, cell) in window.iter_mut().enumerate() {
        let r = row as isize + row_step * i as isize;
        let c = column as isize + column_step * i as isize;
        *cell = board.cell(r as usize, c as usize);
    }
    Some(window)
}

/// Iterates over every window on the board: all rows, all columns and
/// both diagonal families, at every start position that fits
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    DIRECTIONS.iter().flat_map(move |&(row_step, column_step)| {
        (0..HEIGHT).flat_map(move |row| {
            (0..WIDTH).filter_map(move |column| {
                window_at(board, row, column, row_step, column_step)
            })
        })
    })
}

/// Returns true if `piece` has four in a row anywhere on the board
pub fn is_winning_move(board: &Board, piece: Piece) -> bool {
    windows(board).any(|window| window.iter().all(|cell| cell.holds(piece)))
}

/// Returns true if either side has won or the board is full
pub fn is_terminal(board: &Board) -> bool {
    is_winning_move(board, Piece::Player)
        || is_winning_move(board, Piece::Ai)
        || board.valid_columns().is_empty()
}
