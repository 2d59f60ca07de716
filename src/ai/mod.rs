mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{winning_column, Decision, HeuristicAgent, Rule, CENTER_ORDER};
pub use random::RandomAgent;
