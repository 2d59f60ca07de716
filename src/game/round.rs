use std::io;

use tracing::{debug, info, warn};

use super::{rules, Board, Player, COLS};
use crate::ai::Agent;
use crate::error::MoveError;

/// Which seats are driven by the computer. Player 1 is always human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Pvp,
    AiEasy,
    AiHard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Pvp, Mode::AiEasy, Mode::AiHard];

    /// Short label for headers
    pub fn label(self) -> &'static str {
        match self {
            Mode::Pvp => "PvP",
            Mode::AiEasy => "AI lvl EZ",
            Mode::AiHard => "AI lvl HARD",
        }
    }

    /// Whether `player` is the computer in this mode
    pub fn is_computer(self, player: Player) -> bool {
        self != Mode::Pvp && player == Player::Two
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
    Quit,
}

/// One input for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Column(usize),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing(Player),
    RoundOver(Outcome),
}

/// What a single [`Round::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Placed { player: Player, row: usize, col: usize },
    /// Nothing changed; the same player moves again.
    Rejected { col: usize, error: MoveError },
    Reset,
    Quit,
    /// The round was already over.
    Ignored,
}

/// Human input and display for a round.
pub trait Frontend {
    /// Block until the human to move picks an action.
    fn next_action(&mut self, round: &Round) -> io::Result<Action>;

    /// Redraw after `step` has been applied to `round`.
    fn show(&mut self, round: &Round, step: &Step) -> io::Result<()>;
}

/// State machine for one round: owns the board and whose turn it is.
#[derive(Debug, Clone)]
pub struct Round {
    mode: Mode,
    board: Board,
    state: RoundState,
    moves: usize,
    last_move: Option<(usize, usize)>,
}

impl Round {
    pub fn new(mode: Mode) -> Self {
        Round {
            mode,
            board: Board::new(),
            state: RoundState::Playing(Player::One),
            moves: 0,
            last_move: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Player to move, or `None` once the round is over
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            RoundState::Playing(player) => Some(player),
            RoundState::RoundOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Playing(_) => None,
            RoundState::RoundOver(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Chips placed since the round started or was last reset
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Cell filled by the most recent move
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Apply one action for the player to move.
    pub fn step(&mut self, action: Action) -> Step {
        let player = match self.state {
            RoundState::Playing(player) => player,
            RoundState::RoundOver(_) => return Step::Ignored,
        };

        match action {
            Action::Quit => {
                info!(moves = self.moves, "round quit");
                self.state = RoundState::RoundOver(Outcome::Quit);
                Step::Quit
            }
            Action::Reset => {
                info!(moves = self.moves, "round reset");
                self.board.reset();
                self.state = RoundState::Playing(Player::One);
                self.moves = 0;
                self.last_move = None;
                Step::Reset
            }
            Action::Column(col) => {
                debug_assert!(col < COLS, "input produced out-of-range column {col}");
                match self.board.apply(col, player) {
                    Ok(row) => {
                        self.moves += 1;
                        self.last_move = Some((row, col));
                        debug!(player = player.name(), row, col, "chip placed");
                        self.state = if rules::check_win(&self.board, row, col, player) {
                            RoundState::RoundOver(Outcome::Win(player))
                        } else if rules::check_draw(&self.board) {
                            RoundState::RoundOver(Outcome::Draw)
                        } else {
                            RoundState::Playing(player.other())
                        };
                        Step::Placed { player, row, col }
                    }
                    Err(error) => {
                        match error {
                            MoveError::InvalidColumn(_) => warn!(%error, "move rejected"),
                            MoveError::ColumnFull(_) => debug!(%error, "move rejected"),
                        }
                        Step::Rejected { col, error }
                    }
                }
            }
        }
    }

    /// Drive the round to its end. The computer seat (if any) asks `opponent`,
    /// every other turn asks `frontend`. Returns the outcome.
    pub fn play<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        mut opponent: Option<&mut dyn Agent>,
    ) -> io::Result<Outcome> {
        info!(mode = self.mode.label(), "round started");
        loop {
            let player = match self.state {
                RoundState::RoundOver(outcome) => {
                    info!(?outcome, moves = self.moves, "round over");
                    return Ok(outcome);
                }
                RoundState::Playing(player) => player,
            };

            let action = match opponent.as_mut() {
                Some(agent) if self.mode.is_computer(player) => {
                    Action::Column(agent.select_action(&self.board, player))
                }
                _ => frontend.next_action(self)?,
            };

            let step = self.step(action);
            frontend.show(self, &step)?;
        }
    }
}
