//! # Connect Four
//!
//! Connect Four in the terminal: two humans, or a human against a random or
//! a one-ply heuristic computer opponent. Scores are kept for the run.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, rules, round state machine, session
//! - [`ai`]: Agent trait and the two computer opponents
//! - [`ui`]: Terminal UI: menu, game view, keyboard input
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
