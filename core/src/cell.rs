use serde::{Deserialize, Serialize};

/// Generated contents of one cell: a mine, or the count of mine-holding
/// Moore neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TruthCell {
    Mine,
    Count(u8),
}

impl TruthCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacency count for safe cells, `None` for mines.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(n) => Some(n),
        }
    }
}

/// What the player has done to a cell so far.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerCell {
    Hidden,
    Flagged,
    Revealed,
}

impl PlayerCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for PlayerCell {
    fn default() -> Self {
        Self::Hidden
    }
}
