//! Core Connect Four game logic: board, players, win/draw rules, the round
//! state machine and the session that keeps score across rounds.

mod board;
mod player;
pub mod round;
pub mod rules;
mod session;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use round::{Action, Frontend, Mode, Outcome, Round, RoundState, Step};
pub use session::{Score, Session};
