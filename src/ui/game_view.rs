use crate::game::{Board, Cell, Mode, Outcome, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A chip on its way down during the drop animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Falling {
    pub player: Player,
    pub col: usize,
    /// Row the chip is drawn at in this frame
    pub row: usize,
    /// Row it will settle in; already set on the board
    pub landing_row: usize,
}

/// Everything the game screen shows.
pub struct GameView<'a> {
    pub board: &'a Board,
    pub mode: Mode,
    /// `None` once the round is over
    pub current_player: Option<Player>,
    pub cursor: usize,
    pub last_move: Option<(usize, usize)>,
    pub falling: Option<Falling>,
    pub message: Option<&'a str>,
}

impl GameView<'_> {
    /// Cell as it should appear in this frame, with the falling chip applied
    fn cell(&self, row: usize, col: usize) -> Cell {
        if let Some(f) = self.falling {
            if col == f.col {
                if row == f.row {
                    return Cell::Chip(f.player);
                }
                if row == f.landing_row {
                    return Cell::Empty;
                }
            }
        }
        self.board.get(row, col)
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Who sits in `player`'s seat, as shown to the user
pub fn seat_name(mode: Mode, player: Player) -> &'static str {
    match (mode, player) {
        (Mode::Pvp, player) => player.name(),
        (_, Player::One) => "You",
        (_, Player::Two) => "Computer",
    }
}

/// End-of-round line, or `None` for a quit
pub fn outcome_message(mode: Mode, outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Win(player) if mode == Mode::Pvp => Some(format!("{} wins!", player.name())),
        Outcome::Win(Player::One) => Some("You win!".to_string()),
        Outcome::Win(Player::Two) => Some("Computer wins!".to_string()),
        Outcome::Draw => Some("Draw!".to_string()),
        Outcome::Quit => None,
    }
}

pub fn render(frame: &mut Frame, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let (status, color) = match view.current_player {
        Some(player) => (
            format!(
                "Current Player: {}  |  {}",
                seat_name(view.mode, player),
                view.mode.label()
            ),
            player_color(player),
        ),
        None => (format!("Game Over  |  {}", view.mode.label()), Color::Cyan),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &GameView, area: Rect) {
    let cursor_style = match view.current_player {
        Some(player) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    let mut lines = Vec::new();

    // Arrow above the selected column
    let mut arrow_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == view.cursor && view.current_player.is_some() {
            arrow_line.push(Span::styled(" ▼ ", cursor_style));
        } else {
            arrow_line.push(Span::raw("   "));
        }
    }
    arrow_line.push(Span::raw("  ")); // Suffix padding to match "║ "
    lines.push(Line::from(arrow_line));

    // Top border
    lines.push(Line::from("  ╔═════════════════════╗ "));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let span = match view.cell(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Chip(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if view.falling.is_none() && view.last_move == Some((row, col)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw("║ "));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚═════════════════════╝ "));

    // Column numbers, matching the 1-7 keys
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == view.cursor {
            col_line.push(Span::styled(label, cursor_style.add_modifier(Modifier::UNDERLINED)));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/Space: Drop  |  1-7: Column  |  R: Reset  |  Q/Esc: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
