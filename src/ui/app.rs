use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::KeyCode;
use tracing::info;

use super::menu::{Menu, MenuItem};
use super::menu_view::{self, Highlight};
use super::terminal_frontend::{opponent_label, read_key, TerminalFrontend, Tui};
use crate::config::AppConfig;
use crate::game::Session;

/// Number of colour changes when a menu entry is selected
const FLASH_FRAMES: usize = 6;

pub struct App {
    menu: Menu,
    session: Session,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            menu: Menu::new(),
            session: Session::new(config.opponent.seed),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Main application loop; returns when the user exits from the menu.
    pub fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        loop {
            terminal.draw(|f| menu_view::render_menu(f, &self.menu, Highlight::Normal))?;

            match read_key()?.code {
                KeyCode::Up => self.menu.up(),
                KeyCode::Down => self.menu.down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.flash_selected(terminal)?;
                    if !self.activate(terminal)? {
                        break;
                    }
                }
                KeyCode::Esc => break,
                _ => {}
            }
        }
        info!(score = ?self.session.score(), "exiting");
        Ok(())
    }

    /// Run the selected entry. Returns `false` when the user chose to exit.
    fn activate(&mut self, terminal: &mut Tui) -> io::Result<bool> {
        let item = self.menu.selected();
        match item {
            MenuItem::Exit => return Ok(false),
            MenuItem::Statistics => {
                let score = self.session.score();
                terminal.draw(|f| menu_view::render_score(f, &score))?;
                read_key()?;
            }
            MenuItem::HowToPlay => {
                terminal.draw(menu_view::render_help)?;
                read_key()?;
            }
            MenuItem::PlayPvp | MenuItem::PlayEasy | MenuItem::PlayHard => {
                if let Some(mode) = item.mode() {
                    info!(mode = mode.label(), opponent = opponent_label(mode), "starting round");
                    let mut frontend = TerminalFrontend::new(terminal, &self.config.ui);
                    self.session.play_round(mode, &mut frontend)?;
                }
            }
        }
        Ok(true)
    }

    fn flash_selected(&self, terminal: &mut Tui) -> io::Result<()> {
        if self.config.ui.menu_flash_ms == 0 {
            return Ok(());
        }
        let delay = Duration::from_millis(self.config.ui.menu_flash_ms);
        for frame in 0..FLASH_FRAMES {
            let highlight = if frame % 2 == 0 {
                Highlight::Blink
            } else {
                Highlight::Normal
            };
            terminal.draw(|f| menu_view::render_menu(f, &self.menu, highlight))?;
            thread::sleep(delay);
        }
        Ok(())
    }
}
