use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Cell};
use connect4_minimax::{HEIGHT, WIDTH};

/// Draws `board` below the cursor, with 1-indexed column labels on top
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line for the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;
    let top_y = origin_y - (HEIGHT - 1) as u16;

    for (row, cells) in board.rows().enumerate() {
        stdout.queue(MoveTo(origin_x, top_y + row as u16))?;
        for cell in cells {
            let colour = match cell {
                Cell::Player => Color::Red,
                Cell::Ai => Color::Yellow,
                Cell::Empty => Color::DarkBlue,
            };
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(colour),
            ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
