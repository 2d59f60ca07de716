use crate::game::{Board, Player};

/// Universal interface for the computer opponents.
pub trait Agent {
    /// Select a column for `player` to drop into.
    ///
    /// Only called while at least one column is playable. The returned column
    /// must be playable, and `board` is never modified.
    fn select_action(&mut self, board: &Board, player: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
