//! Static evaluation of non-terminal positions

use crate::board::{Board, Cell, Piece};
use crate::rules::{windows, Window};
use crate::{CENTER_COLUMN, HEIGHT};

/// Bonus for each of a side's pieces in the centre column
pub const CENTER_WEIGHT: i64 = 3;
/// A window filled by one side
pub const FOUR_WEIGHT: i64 = 100;
/// Three of a side's pieces and a gap
pub const THREE_WEIGHT: i64 = 5;
/// Two of a side's pieces and two gaps
pub const TWO_WEIGHT: i64 = 2;
/// Three opposing pieces and a gap
pub const OPPONENT_THREE_WEIGHT: i64 = -4;

/// Scores a single window for `piece`
pub fn evaluate_window(window: &Window, piece: Piece) -> i64 {
    let opponent = piece.opponent();
    let count = |wanted: Cell| window.iter().filter(|&&cell| cell == wanted).count();
    let own = count(piece.into());
    let theirs = count(opponent.into());
    let empty = count(Cell::Empty);

    let mut score = match (own, empty) {
        (4, _) => FOUR_WEIGHT,
        (3, 1) => THREE_WEIGHT,
        (2, 2) => TWO_WEIGHT,
        _ => 0,
    };
    if theirs == 3 && empty == 1 {
        score += OPPONENT_THREE_WEIGHT;
    }
    score
}

/// Scores how favourable `board` is for `piece`
///
/// Combines a bonus for occupying the centre column with the sum of
/// [`evaluate_window`] over every window on the board. Only meaningful
/// for boards that are not already won.
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let center = (0..HEIGHT)
        .filter(|&row| board.cell(row, CENTER_COLUMN).holds(piece))
        .count() as i64;

    center * CENTER_WEIGHT
        + windows(board)
            .map(|window| evaluate_window(&window, piece))
            .sum::<i64>()
}
