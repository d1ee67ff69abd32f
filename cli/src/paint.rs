use crossterm::style::Stylize;
use sapper_core::{Board, CellView};
use std::fmt::Write;

/// ANSI-colored rendering of the board. Layout matches `Board::render`:
/// tab-separated cells with bold 1-based row and column labels. Purely
/// cosmetic; the plain markers underneath come from the engine.
pub fn colored_board(board: &Board, show_secrets: bool) -> String {
    let (rows, cols) = board.size();
    let mut out = String::new();

    for y in 0..cols {
        let _ = write!(out, "\t{}", (u16::from(y) + 1).to_string().bold());
    }
    for x in 0..rows {
        let _ = write!(out, "\n{}", (u16::from(x) + 1).to_string().bold());
        for y in 0..cols {
            let _ = write!(out, "\t{}", paint_cell(board.cell_view((x, y), show_secrets)));
        }
    }
    out.push('\n');
    out
}

/// Classic palette: red flags, yellow mis-flags, red mines, one color per
/// digit, dim zero.
fn paint_cell(view: CellView) -> String {
    use CellView::*;

    match view {
        Hidden => "?".to_string(),
        Flagged => "F".red().bold().to_string(),
        Misflag => "F".yellow().bold().to_string(),
        Mine => "X".red().bold().to_string(),
        Revealed(0) => "0".grey().to_string(),
        Revealed(n) => {
            let digit = n.to_string();
            let colored = match n {
                1 => digit.cyan(),
                2 => digit.green(),
                3 => digit.red(),
                4 => digit.blue(),
                5 => digit.yellow(),
                6 => digit.magenta(),
                7 => digit.dark_cyan(),
                _ => digit.dark_red(),
            };
            colored.bold().to_string()
        }
    }
}
