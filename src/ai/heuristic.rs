use crate::game::{rules, Board, Player};
use tracing::debug;

use super::agent::Agent;
use super::random::RandomAgent;

/// Column ordering: center first, then outwards.
pub const CENTER_ORDER: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Which rule produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Win,
    Block,
    Center,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub rule: Rule,
}

/// One-ply opponent: take a win, else block the opponent's win, else play
/// as close to the center as possible.
pub struct HeuristicAgent {
    fallback: RandomAgent,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            fallback: RandomAgent::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            fallback: RandomAgent::with_seed(seed),
        }
    }

    /// Run the rules in priority order and report which one fired.
    pub fn decide(&mut self, board: &Board, player: Player) -> Decision {
        if let Some(column) = winning_column(board, player) {
            return Decision {
                column,
                rule: Rule::Win,
            };
        }
        if let Some(column) = winning_column(board, player.other()) {
            return Decision {
                column,
                rule: Rule::Block,
            };
        }
        if let Some(&column) = CENTER_ORDER
            .iter()
            .find(|&&col| board.is_column_playable(col) == Ok(true))
        {
            return Decision {
                column,
                rule: Rule::Center,
            };
        }
        Decision {
            column: self.fallback.pick_column(board),
            rule: Rule::Random,
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest playable column where `player` would complete a line.
/// Each candidate is tried on a scratch copy; `board` itself is never touched.
pub fn winning_column(board: &Board, player: Player) -> Option<usize> {
    board.playable_columns().find(|&col| {
        let mut scratch = *board;
        match scratch.apply(col, player) {
            Ok(row) => rules::check_win(&scratch, row, col, player),
            Err(_) => false,
        }
    })
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, board: &Board, player: Player) -> usize {
        let decision = self.decide(board, player);
        debug!(
            player = player.name(),
            column = decision.column,
            rule = ?decision.rule,
            "heuristic decision"
        );
        decision.column
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
