use crate::*;
pub use random::*;

mod random;

/// Produces a truth grid for a validated [`GameConfig`].
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> TruthBoard;
}
