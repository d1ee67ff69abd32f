#![no_std]

extern crate alloc;

use core::ops::BitOr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod render;
mod types;

/// Fixed parameters of a single game: board shape and mine total.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Validates and builds a config: both dimensions non-zero and fewer
    /// mines than cells. Nothing is clamped; bad input is an error.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// The generated truth grid: every cell is either a mine or carries its
/// Moore-neighbor mine count. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruthBoard {
    cells: Array2<TruthCell>,
    mine_count: CellCount,
}

impl TruthBoard {
    /// Builds a layout from explicit mine positions. Adjacency counts are
    /// computed here, once, and never change afterwards.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let mut mined: Array2<bool> = Array2::default(size.nd());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoordinate);
            }
            mined[coords.nd()] = true;
        }

        Ok(Self::from_mine_mask(mined))
    }

    pub(crate) fn from_mine_mask(mined: Array2<bool>) -> Self {
        let dim = mined.dim();
        let bounds: Coord2 = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());

        let cells = Array2::from_shape_fn(dim, |(x, y)| {
            if mined[(x, y)] {
                TruthCell::Mine
            } else {
                let count = neighbors((x as Coord, y as Coord), bounds)
                    .filter(|&pos| mined[pos.nd()])
                    .count();
                TruthCell::Count(count.try_into().unwrap())
            }
        });
        let mine_count = mined.iter().filter(|&&m| m).count().try_into().unwrap();

        Self { cells, mine_count }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell(&self, coords: Coord2) -> TruthCell {
        self.cells[coords.nd()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }
}

/// Outcome of a flag call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of a reveal call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Merges per-cell outcomes during a chord walk.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new(0, 5, 1),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            GameConfig::new(5, 0, 1),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_rejects_mine_overflow() {
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            GameConfig::new(3, 3, 200),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_accepts_zero_mines() {
        let config = GameConfig::new(4, 4, 0).unwrap();
        assert_eq!(config.mines(), 0);
        assert_eq!(config.total_cells(), 16);
    }

    #[test]
    fn truth_board_counts_moore_neighbors() {
        let truth = TruthBoard::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(truth.mine_count(), 1);
        assert_eq!(truth.cell((1, 1)), TruthCell::Mine);
        for coords in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ] {
            assert_eq!(truth.cell(coords), TruthCell::Count(1));
        }
    }

    #[test]
    fn truth_board_corner_counts_clip_at_edges() {
        let truth = TruthBoard::from_mine_coords((3, 3), &[(0, 0), (0, 1)]).unwrap();

        assert_eq!(truth.cell((1, 0)), TruthCell::Count(2));
        assert_eq!(truth.cell((1, 2)), TruthCell::Count(1));
        assert_eq!(truth.cell((2, 2)), TruthCell::Count(0));
    }

    #[test]
    fn truth_board_deduplicates_mine_coords() {
        let truth = TruthBoard::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(truth.mine_count(), 1);
    }

    #[test]
    fn truth_board_rejects_out_of_bounds_mines() {
        assert_eq!(
            TruthBoard::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoordinate)
        );
    }

    #[test]
    fn reveal_outcome_merge_prefers_losses() {
        use RevealOutcome::*;
        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(HitMine | Won, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | NoChange, NoChange);

        let merged = [NoChange, Revealed, NoChange]
            .into_iter()
            .fold(NoChange, BitOr::bitor);
        assert_eq!(merged, Revealed);
    }

    #[test]
    fn outcomes_report_whether_anything_changed() {
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(RevealOutcome::Won.has_update());
        assert!(!RevealOutcome::NoChange.has_update());

        assert!(MarkOutcome::Changed.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }
}
