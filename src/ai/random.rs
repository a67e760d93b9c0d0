use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::selector::MoveSelector;

/// A selector that picks uniformly at random from legal columns.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, _board: &Board, legal: &[usize]) -> usize {
        assert!(!legal.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..legal.len());
        legal[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
