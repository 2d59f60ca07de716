//! Terminal UI: main menu, game screen, score and help pages, and the
//! keyboard/rendering frontend that plays a round on the terminal.

mod app;
pub mod game_view;
pub mod menu;
pub mod menu_view;
pub mod terminal_frontend;

pub use app::App;
pub use terminal_frontend::{TerminalFrontend, Tui};
