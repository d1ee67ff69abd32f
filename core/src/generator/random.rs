use ndarray::Array2;

use super::*;

/// Uniform mine placement by rejection sampling: draw a random cell and
/// retry while it is already occupied. Configs are validated before any
/// generator runs (`mines < rows * cols`), so the loop terminates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> TruthBoard {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mined: Array2<bool> = Array2::default(config.size().nd());

        let mut placed: CellCount = 0;
        while placed < config.mines() {
            let coords = (
                rng.random_range(0..config.rows()),
                rng.random_range(0..config.cols()),
            );
            if !mined[coords.nd()] {
                mined[coords.nd()] = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} board (seed {})",
            placed,
            config.rows(),
            config.cols(),
            self.seed
        );
        TruthBoard::from_mine_mask(mined)
    }
}
