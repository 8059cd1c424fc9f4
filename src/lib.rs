//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent picks its moves with a depth-limited minimax search
//! using alpha-beta pruning, scoring the leaves of the game tree with a
//! pattern-based heuristic that favours the centre column and open
//! runs of its own pieces.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Piece}, search::{minimax, WIN_SCORE}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the AI has three in a row along the bottom, with column 4 open
//! let board = Board::from_moves("172737", Piece::Ai)?;
//! let result = minimax(&board, 3, i64::MIN, i64::MAX, true);
//!
//! assert_eq!((result.column, result.score), (Some(3), WIN_SCORE));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod heuristic;

pub mod search;

pub mod game;

pub mod self_play;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of consecutive tiles needed to win, and the size of a scoring window
pub const WINDOW_LENGTH: usize = 4;

/// The column the evaluator rewards occupying
pub const CENTER_COLUMN: usize = WIDTH / 2;

// every line direction needs room for at least one window
const_assert!(WINDOW_LENGTH <= WIDTH);
const_assert!(WINDOW_LENGTH <= HEIGHT);
