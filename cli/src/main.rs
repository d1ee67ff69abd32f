use std::io::{self, BufRead};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use sapper_core::{Board, GameStatus, MarkOutcome, RandomLayoutGenerator, RevealOutcome};

use crate::command::Command;
use crate::difficulty::Difficulty;

mod command;
mod difficulty;
mod paint;

#[derive(Debug, Parser)]
#[command(name = "sapper", version, about = "Terminal minesweeper")]
struct Cli {
    /// Difficulty preset; prompted interactively when omitted
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the mine layout; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter ROW COL to act on a position (rows run down, columns run across).");
    println!("Enter f to toggle between revealing and flagging.");

    let difficulty = match cli.difficulty {
        Some(difficulty) => difficulty,
        None => prompt_difficulty(&mut lines)?,
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("starting a {} game with seed {}", difficulty.label(), seed);

    let mut board = Board::new(difficulty.config(), RandomLayoutGenerator::new(seed));
    let started_at = Utc::now();
    let mut flagging = false;

    print!("{}", paint::colored_board(&board, false));
    while !board.is_finished() {
        let Some(line) = lines.next() else {
            // stdin closed mid-game; nothing more to do
            return Ok(());
        };

        match command::parse(&line?) {
            Some(Command::ToggleFlag) => {
                flagging = !flagging;
                println!("{}", if flagging { "Flagging on." } else { "Flagging off." });
            }
            Some(Command::Act(row, col)) => {
                let Some(coords) = to_coords(&board, row, col) else {
                    println!("Coordinate out of bounds.");
                    continue;
                };
                let updated = if flagging {
                    board.flag(coords).map(MarkOutcome::has_update)
                } else {
                    board.reveal(coords).map(RevealOutcome::has_update)
                };
                match updated {
                    Ok(true) => print!("{}", paint::colored_board(&board, false)),
                    Ok(false) => println!("Nothing to do there."),
                    Err(err) => println!("{err}"),
                }
            }
            None => {
                println!("Invalid input. Enter ROW COL to act on a tile, or f to toggle flagging.");
            }
        }
    }

    print!("{}", paint::colored_board(&board, true));
    let elapsed = (Utc::now() - started_at).num_seconds().max(0);
    match board.status() {
        GameStatus::Won => println!("You win! ({elapsed}s)"),
        GameStatus::Lost => println!("You lose! ({elapsed}s)"),
        GameStatus::InProgress => unreachable!("loop only exits on a finished game"),
    }
    Ok(())
}

/// Converts a 1-based `(row, col)` pair to engine coordinates, rejecting
/// anything outside the board.
fn to_coords(board: &Board, row: usize, col: usize) -> Option<(u8, u8)> {
    let (rows, cols) = board.size();
    if (1..=usize::from(rows)).contains(&row) && (1..=usize::from(cols)).contains(&col) {
        Some(((row - 1) as u8, (col - 1) as u8))
    } else {
        None
    }
}

fn prompt_difficulty(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Difficulty> {
    loop {
        println!("Please select a difficulty:");
        for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
            let (rows, cols, mines) = difficulty.dimensions();
            println!(
                "\t({}) {} : {}x{} : {} mines",
                index + 1,
                difficulty.label(),
                rows,
                cols,
                mines
            );
        }

        let Some(line) = lines.next() else {
            anyhow::bail!("no difficulty selected");
        };
        match line?.trim().parse::<usize>() {
            Ok(choice) if (1..=Difficulty::ALL.len()).contains(&choice) => {
                return Ok(Difficulty::ALL[choice - 1]);
            }
            Ok(_) => println!("Not an option."),
            Err(_) => println!("Invalid input."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::TruthBoard;

    #[test]
    fn coordinate_conversion_is_one_based_and_bounded() {
        let truth = TruthBoard::from_mine_coords((3, 5), &[(0, 0)]).unwrap();
        let board = Board::from_truth(truth);

        assert_eq!(to_coords(&board, 1, 1), Some((0, 0)));
        assert_eq!(to_coords(&board, 3, 5), Some((2, 4)));
        assert_eq!(to_coords(&board, 0, 1), None);
        assert_eq!(to_coords(&board, 4, 1), None);
        assert_eq!(to_coords(&board, 1, 6), None);
    }
}
