use clap::ValueEnum;
use sapper_core::{CellCount, Coord, GameConfig};

/// Fixed difficulty presets, from 8x8 with 8 mines up to 16x32 with 100.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Insane,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Insane,
        Self::Expert,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
            Self::Insane => "INSANE",
            Self::Expert => "EXPERT",
        }
    }

    /// `(rows, cols, mines)` for this preset.
    pub const fn dimensions(self) -> (Coord, Coord, CellCount) {
        match self {
            Self::Easy => (8, 8, 8),
            Self::Normal => (12, 12, 20),
            Self::Hard => (16, 16, 40),
            Self::Insane => (16, 24, 60),
            Self::Expert => (16, 32, 100),
        }
    }

    pub fn config(self) -> GameConfig {
        let (rows, cols, mines) = self.dimensions();
        // presets are static and always valid
        GameConfig::new(rows, cols, mines).expect("preset must be a valid configuration")
    }
}
