//! Turn sequencing for a game between a human and the AI

use anyhow::anyhow;
use log::{info, trace};
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Piece};
use crate::rules::is_winning_move;
use crate::search::{best_move, SearchReport};
use crate::WIDTH;

/// How far ahead the AI looks
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The search depth in plies
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Difficulty::Easy),
            "medium" | "m" | "2" => Ok(Difficulty::Medium),
            "hard" | "h" | "3" => Ok(Difficulty::Hard),
            other => Err(anyhow!(
                "unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum MoveError {
    #[error(
        "Invalid move, column {column} out of range. Columns must be between 0 and {}",
        WIDTH - 1
    )]
    ColumnOutOfRange { column: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },
    #[error("The game is over")]
    GameOver,
    #[error("It is not the {0}'s turn")]
    NotYourTurn(Piece),
}

/// A game in progress, owning the live board
pub struct Game {
    board: Board,
    turn: Piece,
    state: GameState,
    difficulty: Difficulty,
}

impl Game {
    /// Starts a game on an empty board with `first` to move
    pub fn new(difficulty: Difficulty, first: Piece) -> Self {
        Self::from_board(Board::new(), difficulty, first)
    }

    /// Resumes a game from `board` with `turn` to move
    pub fn from_board(board: Board, difficulty: Difficulty, turn: Piece) -> Self {
        Self {
            board,
            turn,
            state: outcome(&board),
            difficulty,
        }
    }

    /// Clears the board for a new game with `first` to move
    pub fn reset(&mut self, first: Piece) {
        self.board = Board::new();
        self.turn = first;
        self.state = GameState::Playing;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Plays the human's piece in `column`
    pub fn play_human(&mut self, column: usize) -> Result<GameState, MoveError> {
        self.check_turn(Piece::Player)?;
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let row = self
            .board
            .next_open_row(column)
            .ok_or(MoveError::ColumnFull { column })?;

        self.board.drop_piece(row, column, Piece::Player);
        Ok(self.finish_move(column, Piece::Player))
    }

    /// Searches for the AI's move at the current difficulty and plays it
    pub fn play_ai(&mut self) -> Result<SearchReport, MoveError> {
        self.check_turn(Piece::Ai)?;

        // every difficulty searches at least one ply, and a game still in
        // play is not terminal, so the root always picks a column
        let report = best_move(&self.board, self.difficulty.depth());
        let column = report
            .result
            .column
            .expect("a search of a live position always yields a column");
        let row = self
            .board
            .next_open_row(column)
            .expect("the search only returns open columns");

        self.board.drop_piece(row, column, Piece::Ai);
        self.finish_move(column, Piece::Ai);
        Ok(report)
    }

    fn check_turn(&self, piece: Piece) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != piece {
            return Err(MoveError::NotYourTurn(piece));
        }
        Ok(())
    }

    fn finish_move(&mut self, column: usize, piece: Piece) -> GameState {
        trace!("{} played column {}\n{}", piece, column, self.board);

        self.state = outcome(&self.board);

        if self.is_over() {
            info!(
                "game over after {} pieces: {:?}",
                self.board.num_pieces(),
                self.state
            );
        } else {
            self.turn = piece.opponent();
        }
        self.state
    }
}

/// The state of a game that has reached `board`
fn outcome(board: &Board) -> GameState {
    if is_winning_move(board, Piece::Player) {
        GameState::PlayerWin
    } else if is_winning_move(board, Piece::Ai) {
        GameState::AiWin
    } else if board.is_full() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
