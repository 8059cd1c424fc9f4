use anyhow::{anyhow, Result};

use std::fmt;

use crate::{rules, HEIGHT, WIDTH};

/// One of the two sides in a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Player => write!(f, "Player"),
            Piece::Ai => write!(f, "AI"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if this cell holds `piece`
    pub fn holds(&self, piece: Piece) -> bool {
        *self == Cell::from(piece)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Player => Cell::Player,
            Piece::Ai => Cell::Ai,
        }
    }
}

/// A 6x7 grid of cells
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom; columns
/// run left to right from 0. Pieces only ever enter the board through
/// [`Board::drop_piece`] at the row given by [`Board::next_open_row`], which
/// keeps every column stacked contiguously from the bottom.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, top-to-bottom
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Creates a board from a string of 1-indexed column numbers, with
    /// `first` placing the first piece and the sides alternating after that
    ///
    /// The last move may win the game, so finished positions can be loaded,
    /// but no move may follow a win.
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Piece) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if an earlier move already won
                    if rules::is_winning_move(&board, piece.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    let row = board
                        .next_open_row(column - 1)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;
                    board.drop_piece(row, column - 1, piece);
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Writes `piece` into the cell at `(row, column)`
    ///
    /// The cell should come from [`Board::next_open_row`]. Panics if it is
    /// out of bounds or already occupied.
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        assert!(row < HEIGHT && column < WIDTH, "cell ({}, {}) is off the board", row, column);
        assert!(
            self.cell(row, column).is_empty(),
            "cell ({}, {}) is already occupied",
            row,
            column
        );
        self.cells[row * WIDTH + column] = piece.into();
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * WIDTH + column]
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(WIDTH)
    }

    /// Returns true if another piece fits in `column`
    pub fn is_column_open(&self, column: usize) -> bool {
        self.cell(0, column).is_empty()
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
    }

    /// All open columns in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_column_open(c)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|c| !self.is_column_open(c))
    }

    /// The number of pieces on the board
    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy of this board with every Player piece replaced by an
    /// AI piece and vice versa
    pub fn swapped(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            *cell = match *cell {
                Cell::Empty => Cell::Empty,
                Cell::Player => Cell::Ai,
                Cell::Ai => Cell::Player,
            };
        }
        swapped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Player => 'X',
                    Cell::Ai => 'O',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "{}", columns)
    }
}
