//! Matches between two computer players, for comparing search depths

use indicatif::*;
use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rayon::prelude::*;

use std::time::Instant;

use crate::board::{Board, Piece};
use crate::rules::is_winning_move;
use crate::search::minimax;

/// Settings for a series of AI-vs-AI games
#[derive(Copy, Clone, Debug)]
pub struct MatchConfig {
    pub games: usize,
    /// Search depth for the side playing the AI's pieces
    pub ai_depth: u32,
    /// Search depth for the side playing the Player's pieces
    pub player_depth: u32,
    /// Number of uniformly random moves played before either side searches
    pub random_openings: usize,
    pub seed: u64,
}

/// How a single game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameOutcome {
    pub winner: Option<Piece>,
    pub plies: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MatchSummary {
    pub ai_wins: usize,
    pub player_wins: usize,
    pub draws: usize,
    pub total_plies: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.ai_wins + self.player_wins + self.draws
    }

    pub fn mean_plies(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.total_plies as f64 / games as f64,
        }
    }

    fn record(mut self, outcome: GameOutcome) -> Self {
        match outcome.winner {
            Some(Piece::Ai) => self.ai_wins += 1,
            Some(Piece::Player) => self.player_wins += 1,
            None => self.draws += 1,
        }
        self.total_plies += outcome.plies;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            ai_wins: self.ai_wins + other.ai_wins,
            player_wins: self.player_wins + other.player_wins,
            draws: self.draws + other.draws,
            total_plies: self.total_plies + other.total_plies,
        }
    }
}

/// Chooses a column for `piece` by searching `depth` plies
///
/// The evaluator only scores positions for the AI, so the Player's pieces
/// search on a board with the two sides exchanged. A depth of 0 is
/// treated as 1, since a search that never moves returns no column.
pub fn choose_column(board: &Board, piece: Piece, depth: u32) -> Option<usize> {
    let board = match piece {
        Piece::Ai => *board,
        Piece::Player => board.swapped(),
    };
    minimax(&board, depth.max(1), i64::MIN, i64::MAX, true).column
}

/// Plays one game to completion with `first` to move
pub fn play_game(config: &MatchConfig, first: Piece, rng: &mut StdRng) -> GameOutcome {
    let mut board = Board::new();
    let mut piece = first;
    let mut plies = 0;

    loop {
        let column = if plies < config.random_openings {
            board.valid_columns().choose(rng).copied()
        } else {
            let depth = match piece {
                Piece::Ai => config.ai_depth,
                Piece::Player => config.player_depth,
            };
            choose_column(&board, piece, depth)
        };

        let (column, row) = match column.and_then(|c| board.next_open_row(c).map(|r| (c, r))) {
            Some(found) => found,
            // no legal moves left
            None => return GameOutcome { winner: None, plies },
        };
        board.drop_piece(row, column, piece);
        plies += 1;

        if is_winning_move(&board, piece) {
            return GameOutcome {
                winner: Some(piece),
                plies,
            };
        }
        if board.is_full() {
            return GameOutcome { winner: None, plies };
        }
        piece = piece.opponent();
    }
}

/// Plays `config.games` games in parallel, alternating which side opens
pub fn run_match(config: &MatchConfig) -> MatchSummary {
    let start = Instant::now();

    let progress = ProgressBar::new(config.games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let summary = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let first = if game % 2 == 0 { Piece::Ai } else { Piece::Player };
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game as u64));
            let outcome = play_game(config, first, &mut rng);
            progress.inc(1);
            outcome
        })
        .fold(MatchSummary::default, MatchSummary::record)
        .reduce(MatchSummary::default, MatchSummary::merge);

    progress.finish();
    info!(
        "match of {} games (AI depth {}, Player depth {}) finished in {}: {:?}",
        summary.games(),
        config.ai_depth,
        config.player_depth,
        HumanDuration(start.elapsed()),
        summary
    );
    summary
}
