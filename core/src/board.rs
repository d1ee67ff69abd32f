use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Derived game state, recomputed after every mutating call. `Won` and
/// `Lost` are terminal and never revert.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The gameplay engine: a generated truth grid plus the player-visible
/// grid, both created together and replaced together.
///
/// One instance may play any number of games through
/// [`Board::reinitialize`]; each game discards all prior state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    truth: TruthBoard,
    player: Array2<PlayerCell>,
    status: GameStatus,
}

impl Board {
    pub fn new(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::from_truth(generator.generate(config))
    }

    /// Builds an engine over a pre-made layout; used by tests and by
    /// [`Board::new`] after generation.
    pub fn from_truth(truth: TruthBoard) -> Self {
        let size = truth.size();
        Self {
            truth,
            player: Array2::default(size.nd()),
            status: GameStatus::default(),
        }
    }

    /// Starts a new game on the same instance, discarding the previous
    /// truth grid, player grid, and status.
    pub fn reinitialize(&mut self, config: GameConfig, generator: impl LayoutGenerator) {
        *self = Self::new(config, generator);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.truth.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.truth.mine_count()
    }

    pub fn player_cell(&self, coords: Coord2) -> PlayerCell {
        self.player[coords.nd()]
    }

    pub fn truth_cell(&self, coords: Coord2) -> TruthCell {
        self.truth.cell(coords)
    }

    /// Reveals a cell, or chords on an already-revealed one.
    ///
    /// Picking a mine loses on the spot, whatever the player state of that
    /// cell. A revealed numbered cell whose flag tally matches its count
    /// opens its hidden neighbors instead. Any successful non-losing
    /// reveal runs the auto-clear cascade and then the win check.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.truth.validate_coords(coords)?;
        self.check_in_progress()?;

        if self.truth.cell(coords).is_mine() {
            self.status = GameStatus::Lost;
            log::debug!("revealed a mine at {:?}", coords);
            return Ok(HitMine);
        }

        let outcome = if self.player[coords.nd()].is_revealed() {
            self.chord_neighbors(coords)
        } else {
            // a flagged cell picked for reveal opens like a hidden one
            self.player[coords.nd()] = PlayerCell::Revealed;
            log::trace!("revealed {:?}", coords);
            Revealed
        };

        match outcome {
            HitMine => {
                self.status = GameStatus::Lost;
                Ok(HitMine)
            }
            NoChange => Ok(NoChange),
            Revealed | Won => {
                self.flood_reveal();
                self.evaluate_win();
                Ok(if self.status == GameStatus::Won {
                    Won
                } else {
                    Revealed
                })
            }
        }
    }

    /// Chord walk: opens every hidden neighbor of a revealed cell whose
    /// flagged-neighbor tally matches its count. The walk stops at the
    /// first mine it opens; neighbors later in scan order stay untouched.
    ///
    /// A mismatched tally is a pure no-op. A matched walk reports
    /// `Revealed` even when every neighbor was already open or flagged,
    /// so the cascade and the win check still run afterwards.
    fn chord_neighbors(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let Some(count) = self.truth.cell(coords).count() else {
            return NoChange;
        };
        if count != self.count_flagged_neighbors(coords) {
            return NoChange;
        }

        for pos in neighbors(coords, self.truth.size()) {
            if !self.player[pos.nd()].is_hidden() {
                continue;
            }
            if self.truth.cell(pos).is_mine() {
                log::debug!("chord at {:?} opened a mine at {:?}", coords, pos);
                return HitMine;
            }
            self.player[pos.nd()] = PlayerCell::Revealed;
        }
        Revealed
    }

    /// Auto-clear cascade, run to fixpoint: every hidden cell adjacent to
    /// a revealed zero-count cell becomes revealed, repeatedly.
    ///
    /// The worklist is seeded from all currently revealed zero-count
    /// cells, not just the last move, so a cascade that an earlier flag
    /// suppressed still completes once the flag is gone. Flagged cells are
    /// never auto-revealed. Running this again at fixpoint changes
    /// nothing.
    fn flood_reveal(&mut self) {
        let size = self.truth.size();
        let (rows, cols) = size;

        let mut frontier: VecDeque<Coord2> = VecDeque::new();
        for x in 0..rows {
            for y in 0..cols {
                if self.player[(x, y).nd()].is_revealed()
                    && self.truth.cell((x, y)).count() == Some(0)
                {
                    frontier.push_back((x, y));
                }
            }
        }

        // neighbors of a zero-count cell are never mines, so every hidden
        // neighbor is safe to open
        while let Some(zero) = frontier.pop_front() {
            for pos in neighbors(zero, size) {
                if !self.player[pos.nd()].is_hidden() {
                    continue;
                }
                self.player[pos.nd()] = PlayerCell::Revealed;
                log::trace!("cascade revealed {:?}", pos);
                if self.truth.cell(pos).count() == Some(0) {
                    frontier.push_back(pos);
                }
            }
        }
    }

    /// Toggles a flag. Placing one runs the win check; removing one does
    /// not, so a corrected mis-flag only pays off on the next flag
    /// placement or reveal. Revealed cells cannot be flagged.
    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.truth.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(match self.player[coords.nd()] {
            PlayerCell::Hidden => {
                self.player[coords.nd()] = PlayerCell::Flagged;
                self.evaluate_win();
                Changed
            }
            PlayerCell::Flagged => {
                self.player[coords.nd()] = PlayerCell::Hidden;
                Changed
            }
            PlayerCell::Revealed => NoChange,
        })
    }

    /// Win policy: every flag sits on a mine and the flag total equals the
    /// mine total. A single mis-flag aborts the check outright, and
    /// revealing the safe cells is not required. This mirrors the
    /// reference rules exactly.
    fn evaluate_win(&mut self) {
        let (rows, cols) = self.truth.size();

        let mut correct_flags: CellCount = 0;
        for x in 0..rows {
            for y in 0..cols {
                if self.player[(x, y).nd()].is_flagged() {
                    if self.truth.cell((x, y)).is_mine() {
                        correct_flags += 1;
                    } else {
                        return;
                    }
                }
            }
        }

        if correct_flags == self.truth.mine_count() {
            self.status = GameStatus::Won;
            log::debug!("all {} mines flagged, game won", correct_flags);
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.truth.size())
            .filter(|&pos| self.player[pos.nd()].is_flagged())
            .count()
            .try_into()
            .unwrap()
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
