use anyhow::{anyhow, Result};
use structopt::StructOpt;

use std::io::{stdin, stdout, Write};
use std::str::FromStr;
use std::time::Duration;

use connect4_minimax::board::{Board, Piece};
use connect4_minimax::game::{Difficulty, Game, GameState};
use connect4_minimax::search::best_move;
use connect4_minimax::self_play::{run_match, MatchConfig};
use connect4_minimax::WIDTH;

mod display;

/// Which side places the first piece
#[derive(Copy, Clone, Debug)]
enum FirstMove {
    Player,
    Ai,
    Random,
}

impl FirstMove {
    fn pick(self) -> Piece {
        match self {
            FirstMove::Player => Piece::Player,
            FirstMove::Ai => Piece::Ai,
            FirstMove::Random => {
                if rand::random() {
                    Piece::Player
                } else {
                    Piece::Ai
                }
            }
        }
    }
}

impl FromStr for FirstMove {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "player" | "human" => Ok(FirstMove::Player),
            "ai" | "computer" => Ok(FirstMove::Ai),
            "random" => Ok(FirstMove::Random),
            other => Err(anyhow!(
                "unknown side '{}', expected player, ai or random",
                other
            )),
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "connect4",
    about = "Play Connect 4 against a minimax opponent"
)]
struct Opt {
    #[structopt(subcommand)]
    command: Option<Command>,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(
        name = "play",
        about = "Play against the computer (the default). \
                 The difficulty is asked for unless given with `--difficulty`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "match",
        about = "Watch the computer play itself over a number of games \
                 at two search depths and report the results."
    )]
    Match(MatchArgs),
    #[structopt(
        name = "analyse",
        about = "Search for the AI's best move in a position given \
                 as a string of 1-indexed columns with `--moves`."
    )]
    Analyse(AnalyseArgs),
}

#[derive(StructOpt)]
struct PlayArgs {
    #[structopt(short, long)]
    difficulty: Option<Difficulty>,
    #[structopt(short, long, default_value = "random")]
    first: FirstMove,
    /// Pause before each AI move, in milliseconds
    #[structopt(long = "think-ms", default_value = "500")]
    think_ms: u64,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            difficulty: None,
            first: FirstMove::Random,
            think_ms: 500,
        }
    }
}

#[derive(StructOpt)]
struct MatchArgs {
    #[structopt(short, long, default_value = "100")]
    games: usize,
    /// Search depth of the side playing the AI's pieces
    #[structopt(long = "first-depth", default_value = "5")]
    first_depth: u32,
    /// Search depth of the side playing the Player's pieces
    #[structopt(long = "second-depth", default_value = "3")]
    second_depth: u32,
    #[structopt(long = "random-openings", default_value = "2")]
    random_openings: usize,
    #[structopt(long, default_value = "0")]
    seed: u64,
}

#[derive(StructOpt)]
struct AnalyseArgs {
    #[structopt(short, long, default_value = "")]
    moves: String,
    #[structopt(short, long, default_value = "5")]
    depth: u32,
    /// The side that played the first of `--moves`
    #[structopt(short, long, default_value = "player")]
    first: FirstMove,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Opt::from_args().command {
        None => play(PlayArgs::default()),
        Some(Command::Play(args)) => play(args),
        Some(Command::Match(args)) => play_match(args),
        Some(Command::Analyse(args)) => analyse(args),
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_lowercase())
}

fn ask_difficulty() -> Result<Difficulty> {
    let options: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| format!("{} ({} ply)", d, d.depth()))
        .collect();
    loop {
        let answer = prompt(&format!("Select difficulty, {}: ", options.join(", ")))?;
        match answer.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => println!("{}", err),
        }
    }
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        match prompt(&format!("{} y/n: ", question))?.chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play(args: PlayArgs) -> Result<()> {
    println!("Welcome to Connect 4\n");

    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => ask_difficulty()?,
    };
    let think_time = Duration::from_millis(args.think_ms);
    let mut game = Game::new(difficulty, args.first.pick());
    println!(
        "Playing on {} difficulty, {} moves first. \
         Enter a column number, 'r' to restart or 'q' to quit.",
        game.difficulty(),
        game.turn()
    );

    // game loop
    loop {
        display::draw(game.board())?;

        match game.state() {
            GameState::Playing => {
                if game.turn() == Piece::Ai {
                    println!("AI is thinking...");
                    stdout().flush()?;
                    std::thread::sleep(think_time);

                    let report = game.play_ai()?;
                    if let Some(column) = report.result.column {
                        println!("AI plays column {}", column + 1);
                    }
                    continue;
                }

                let input = prompt("Move input > ")?;
                match input.as_str() {
                    "q" | "quit" => break,
                    "r" | "restart" => {
                        game.reset(args.first.pick());
                        println!("New game, {} moves first", game.turn());
                        continue;
                    }
                    _ => {}
                }
                let column = match input.parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!("Invalid column: {}, enter a number from 1 to {}", input, WIDTH);
                        continue;
                    }
                };
                if let Err(err) = game.play_human(column) {
                    println!("{}", err);
                }
            }

            // end states
            state => {
                match state {
                    GameState::PlayerWin => println!("You win!"),
                    GameState::AiWin => println!("AI wins!"),
                    _ => println!("It's a tie!"),
                }
                if !ask_yes_no("Play again?")? {
                    break;
                }
                game.set_difficulty(ask_difficulty()?);
                game.reset(args.first.pick());
                println!("New game, {} moves first", game.turn());
            }
        }
    }
    Ok(())
}

fn play_match(args: MatchArgs) -> Result<()> {
    let config = MatchConfig {
        games: args.games,
        ai_depth: args.first_depth,
        player_depth: args.second_depth,
        random_openings: args.random_openings,
        seed: args.seed,
    };
    let summary = run_match(&config);

    println!(
        "Depth {} won {}, depth {} won {}, {} drawn. Mean game length {:.1} moves.",
        config.ai_depth,
        summary.ai_wins,
        config.player_depth,
        summary.player_wins,
        summary.draws,
        summary.mean_plies()
    );
    Ok(())
}

fn analyse(args: AnalyseArgs) -> Result<()> {
    let board = Board::from_moves(&args.moves, args.first.pick())?;
    display::draw(&board)?;

    let report = best_move(&board, args.depth);
    match report.result.column {
        Some(column) => println!(
            "Best move for the AI: {}, score {}",
            column + 1,
            report.result.score
        ),
        None => println!("No move to make, score {}", report.result.score),
    }
    println!(
        "Searched {} positions in {:.3}ms",
        report.node_count,
        report.elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
