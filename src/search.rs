//! Depth-limited minimax search with alpha-beta pruning

use log::debug;
use rand::{seq::SliceRandom, thread_rng};

use std::time::{Duration, Instant};

use crate::board::{Board, Piece};
use crate::heuristic::score_position;
use crate::rules::{is_terminal, is_winning_move};
use crate::WIDTH;

/// The score of a position the AI has won
pub const WIN_SCORE: i64 = 100_000_000_000;
/// The score of a position the Player has won
pub const LOSS_SCORE: i64 = -WIN_SCORE;
/// The score of a full board with no winner
pub const DRAW_SCORE: i64 = 0;

/// The outcome of a search: the column to play and the score it leads to
///
/// Scores are always from the AI's point of view. `column` is `None` only
/// for leaf nodes, where no move is made.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

/// A root search together with diagnostics about it
#[derive(Copy, Clone, Debug)]
pub struct SearchReport {
    pub result: SearchResult,
    /// The number of positions visited, leaves included
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Searches `depth` plies ahead of `board` and returns the best column for
/// the side to move together with its score
///
/// The AI is the maximizing side and the Player the minimizing side.
/// `alpha` and `beta` bound the scores already guaranteed elsewhere in the
/// tree; callers at the root pass `i64::MIN` and `i64::MAX`. Leaves at the
/// depth limit are scored by [`score_position`] for the AI, whichever side
/// would move next.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i64,
    beta: i64,
    maximizing: bool,
) -> SearchResult {
    let mut node_count = 0;
    search(board, depth, alpha, beta, maximizing, &mut node_count)
}

/// Picks the AI's move on `board` with a full-window search `depth` plies deep
pub fn best_move(board: &Board, depth: u32) -> SearchReport {
    let start_time = Instant::now();
    let mut node_count = 0;
    let result = search(board, depth, i64::MIN, i64::MAX, true, &mut node_count);
    let elapsed = start_time.elapsed();

    debug!(
        "depth {} search chose column {:?} with score {} ({} nodes in {:.3}ms)",
        depth,
        result.column,
        result.score,
        node_count,
        elapsed.as_secs_f64() * 1000.0
    );

    SearchReport {
        result,
        node_count,
        elapsed,
    }
}

fn search(
    board: &Board,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    node_count: &mut usize,
) -> SearchResult {
    *node_count += 1;

    if depth == 0 || is_terminal(board) {
        let score = if is_winning_move(board, Piece::Ai) {
            WIN_SCORE
        } else if is_winning_move(board, Piece::Player) {
            LOSS_SCORE
        } else if board.is_full() {
            DRAW_SCORE
        } else {
            score_position(board, Piece::Ai)
        };
        return SearchResult {
            column: None,
            score,
        };
    }

    // open columns in ascending order, with the row a piece would land in
    let moves: Vec<(usize, usize)> = (0..WIDTH)
        .filter_map(|column| board.next_open_row(column).map(|row| (column, row)))
        .collect();
    // a board with no open column is full, so is_terminal caught it above
    assert!(!moves.is_empty(), "searched a full board that was not terminal");

    // fallback if no column ever improves on the initial bound
    let mut column = moves.choose(&mut thread_rng()).map(|&(column, _)| column);

    let (piece, mut value) = if maximizing {
        (Piece::Ai, i64::MIN)
    } else {
        (Piece::Player, i64::MAX)
    };

    for &(candidate, row) in moves.iter() {
        let mut next = *board;
        next.drop_piece(row, candidate, piece);
        let score = search(&next, depth - 1, alpha, beta, !maximizing, node_count).score;

        if maximizing {
            if score > value {
                value = score;
                column = Some(candidate);
            }
            alpha = alpha.max(value);
        } else {
            if score < value {
                value = score;
                column = Some(candidate);
            }
            beta = beta.min(value);
        }
        // the other side already has a better option elsewhere
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        column,
        score: value,
    }
}
