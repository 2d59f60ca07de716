use crate::game::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PlayPvp,
    PlayEasy,
    PlayHard,
    Statistics,
    HowToPlay,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::PlayPvp,
        MenuItem::PlayEasy,
        MenuItem::PlayHard,
        MenuItem::Statistics,
        MenuItem::HowToPlay,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PlayPvp => "Play PvP [I have friends]",
            MenuItem::PlayEasy => "Play vs AI [EZ MODE]",
            MenuItem::PlayHard => "Play vs AI [HARD MODE]",
            MenuItem::Statistics => "Show games statistics",
            MenuItem::HowToPlay => "How to play?",
            MenuItem::Exit => "Exit",
        }
    }

    /// Game mode started by this entry, if it starts one
    pub fn mode(self) -> Option<Mode> {
        match self {
            MenuItem::PlayPvp => Some(Mode::Pvp),
            MenuItem::PlayEasy => Some(Mode::AiEasy),
            MenuItem::PlayHard => Some(Mode::AiHard),
            _ => None,
        }
    }
}

/// Selection state of the main menu. Moving past either end is clamped.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < MenuItem::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }
}
