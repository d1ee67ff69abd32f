use alloc::format;
use alloc::string::String;

use crate::*;

/// Per-cell presentation state, derived from the two grids. The secrets
/// variants (`Mine`, `Misflag`) only appear when the caller asks for them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    Misflag,
}

impl CellView {
    /// Plain-text marker for this cell. Styling is up to the caller.
    pub fn marker(self) -> char {
        match self {
            Self::Hidden => '?',
            Self::Flagged => 'F',
            Self::Revealed(n) => char::from(b'0' + n),
            Self::Mine => 'X',
            Self::Misflag => 'f',
        }
    }
}

impl Board {
    /// Presentation view of one cell.
    ///
    /// Normal mode reports the player grid verbatim. With `show_secrets`
    /// (the end-of-game display) every unflagged cell shows its truth, and
    /// flags split into correct ones and mis-flags.
    pub fn cell_view(&self, coords: Coord2, show_secrets: bool) -> CellView {
        let player = self.player_cell(coords);
        let truth = self.truth_cell(coords);

        if show_secrets {
            return match (player, truth) {
                (PlayerCell::Flagged, TruthCell::Mine) => CellView::Flagged,
                (PlayerCell::Flagged, TruthCell::Count(_)) => CellView::Misflag,
                (_, TruthCell::Mine) => CellView::Mine,
                (_, TruthCell::Count(n)) => CellView::Revealed(n),
            };
        }

        match (player, truth) {
            (PlayerCell::Hidden, _) => CellView::Hidden,
            (PlayerCell::Flagged, _) => CellView::Flagged,
            (PlayerCell::Revealed, TruthCell::Count(n)) => CellView::Revealed(n),
            // unreachable in practice: a losing reveal never marks the
            // mine cell itself as revealed
            (PlayerCell::Revealed, TruthCell::Mine) => CellView::Mine,
        }
    }

    /// Pure text rendering of the board: tab-separated cells with 1-based
    /// row and column labels. No I/O, no color.
    pub fn render(&self, show_secrets: bool) -> String {
        let (rows, cols) = self.size();
        let mut out = String::new();

        for y in 0..cols {
            out.push_str(&format!("\t{}", u16::from(y) + 1));
        }
        for x in 0..rows {
            out.push_str(&format!("\n{}", u16::from(x) + 1));
            for y in 0..cols {
                out.push('\t');
                out.push(self.cell_view((x, y), show_secrets).marker());
            }
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_truth(TruthBoard::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn fresh_board_renders_all_hidden() {
        let board = board((2, 3), &[(0, 0)]);
        assert_eq!(board.render(false), "\t1\t2\t3\n1\t?\t?\t?\n2\t?\t?\t?\n");
    }

    #[test]
    fn revealed_cells_render_their_counts() {
        let mut board = board((2, 2), &[(0, 0), (1, 1)]);
        board.reveal((0, 1)).unwrap();
        board.flag((0, 0)).unwrap();

        assert_eq!(board.render(false), "\t1\t2\n1\tF\t2\n2\t?\t?\n");
    }

    #[test]
    fn zero_renders_as_its_own_marker() {
        let mut board = board((2, 2), &[]);
        board.reveal((0, 0)).unwrap();

        assert_eq!(board.cell_view((1, 1), false), CellView::Revealed(0));
        assert_eq!(CellView::Revealed(0).marker(), '0');
        assert_ne!(CellView::Revealed(1).marker(), '0');
    }

    #[test]
    fn secrets_mode_exposes_mines_and_grades_flags() {
        let mut board = board((2, 2), &[(0, 0), (1, 1)]);
        board.flag((0, 0)).unwrap(); // correct
        board.flag((0, 1)).unwrap(); // mis-flag

        assert_eq!(board.cell_view((0, 0), true), CellView::Flagged);
        assert_eq!(board.cell_view((0, 1), true), CellView::Misflag);
        assert_eq!(board.cell_view((1, 1), true), CellView::Mine);
        assert_eq!(board.cell_view((1, 0), true), CellView::Revealed(2));

        assert_eq!(board.render(true), "\t1\t2\n1\tF\tf\n2\t2\tX\n");
    }

    #[test]
    fn normal_mode_never_grades_flags() {
        let mut board = board((2, 2), &[(0, 0), (1, 1)]);
        board.flag((0, 1)).unwrap(); // mis-flag, invisible as such

        assert_eq!(board.cell_view((0, 1), false), CellView::Flagged);
    }
}
