use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::trace;

use super::game_view::{self, Falling, GameView};
use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{Action, Frontend, Mode, Player, Round, Step, COLS};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// What a key means on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Drop,
    Column(usize),
    Reset,
    Quit,
}

pub fn game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left => Some(GameKey::Left),
        KeyCode::Right => Some(GameKey::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameKey::Drop),
        KeyCode::Char(c @ '1'..='7') => Some(GameKey::Column(c as usize - '1' as usize)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameKey::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameKey::Quit),
        _ => None,
    }
}

/// Block until a key is pressed. Release and repeat events are skipped.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Plays a round on the terminal: reads keys for the human seats and redraws
/// the board after every step.
pub struct TerminalFrontend<'a> {
    terminal: &'a mut Tui,
    config: &'a UiConfig,
    cursor: usize,
    message: Option<String>,
}

impl<'a> TerminalFrontend<'a> {
    pub fn new(terminal: &'a mut Tui, config: &'a UiConfig) -> Self {
        TerminalFrontend {
            terminal,
            config,
            cursor: COLS / 2,
            message: Some("Good luck. Try not to embarrass yourself.".to_string()),
        }
    }

    fn draw(&mut self, round: &Round, falling: Option<Falling>) -> io::Result<()> {
        let view = GameView {
            board: round.board(),
            mode: round.mode(),
            current_player: round.current_player(),
            cursor: self.cursor,
            last_move: round.last_move(),
            falling,
            message: self.message.as_deref(),
        };
        self.terminal.draw(|f| game_view::render(f, &view))?;
        Ok(())
    }

    /// Let the chip fall row by row into `landing_row`.
    fn animate_drop(
        &mut self,
        round: &Round,
        player: Player,
        landing_row: usize,
        col: usize,
    ) -> io::Result<()> {
        if self.config.drop_animation_ms > 0 {
            let delay = Duration::from_millis(self.config.drop_animation_ms);
            for row in 0..landing_row {
                let falling = Falling {
                    player,
                    col,
                    row,
                    landing_row,
                };
                self.draw(round, Some(falling))?;
                thread::sleep(delay);
            }
        }
        self.draw(round, None)
    }
}

impl Frontend for TerminalFrontend<'_> {
    fn next_action(&mut self, round: &Round) -> io::Result<Action> {
        loop {
            self.draw(round, None)?;
            let key = read_key()?;
            let Some(mapped) = game_key(key.code) else {
                continue;
            };
            trace!(?mapped, "key");
            match mapped {
                GameKey::Left => self.cursor = self.cursor.saturating_sub(1),
                GameKey::Right => self.cursor = (self.cursor + 1).min(COLS - 1),
                GameKey::Drop => return Ok(Action::Column(self.cursor)),
                GameKey::Column(col) => {
                    self.cursor = col;
                    return Ok(Action::Column(col));
                }
                GameKey::Reset => return Ok(Action::Reset),
                GameKey::Quit => return Ok(Action::Quit),
            }
        }
    }

    fn show(&mut self, round: &Round, step: &Step) -> io::Result<()> {
        match *step {
            Step::Placed { player, row, col } => {
                self.cursor = col;
                self.message = None;
                self.animate_drop(round, player, row, col)?;

                if let Some(outcome) = round.outcome() {
                    if let Some(text) = game_view::outcome_message(round.mode(), outcome) {
                        self.message = Some(format!("{text} Press any key..."));
                        self.draw(round, None)?;
                        read_key()?;
                    }
                } else if let Some(next) = round.current_player() {
                    if round.mode().is_computer(next) {
                        self.message = Some("Computer is thinking...".to_string());
                        self.draw(round, None)?;
                        thread::sleep(Duration::from_millis(self.config.computer_delay_ms));
                        self.message = None;
                    }
                }
            }
            Step::Rejected {
                error: MoveError::ColumnFull(_),
                ..
            } => {
                self.message = Some("Column full. Pick another one.".to_string());
            }
            Step::Rejected { .. } => {
                self.message = Some("Invalid column.".to_string());
            }
            Step::Reset => {
                self.cursor = COLS / 2;
                self.message = Some("The game has been reset.".to_string());
            }
            Step::Quit | Step::Ignored => {}
        }
        Ok(())
    }
}

/// Seat label for a mode's computer opponent, for logs
pub fn opponent_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Pvp => "human",
        Mode::AiEasy => "random",
        Mode::AiHard => "heuristic",
    }
}
