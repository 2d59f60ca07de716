use crate::game::{Board, Player, COLS};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::trace;

use super::agent::Agent;

/// An agent that picks a uniformly random playable column.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample columns until one is playable.
    pub fn pick_column(&mut self, board: &Board) -> usize {
        assert!(
            board.playable_columns().next().is_some(),
            "No playable column available"
        );
        loop {
            let col = self.rng.random_range(0..COLS);
            if board.is_column_playable(col) == Ok(true) {
                return col;
            }
            trace!(col, "sampled a full column, resampling");
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, _player: Player) -> usize {
        self.pick_column(board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
