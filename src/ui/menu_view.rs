//! Screens around the game: main menu, score table and the how-to-play page.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::menu::{Menu, MenuItem};
use crate::game::Score;

const LOGO: [&str; 6] = [
    r" _____                             _       ___ ",
    r"/  __ \                           | |     /   |",
    r"| /  \/ ___  _ __  _ __   ___  ___| |_   / /| |",
    r"| |    / _ \| '_ \| '_ \ / _ \/ __| __| / /_| |",
    r"| \__/\ (_) | | | | | | |  __/ (__| |_  \___  |",
    r" \____/\___/|_| |_|_| |_|\___|\___|\__|     |_/",
];

/// Highlight of the selected entry. `Blink` is the alternate colour used
/// while the selection flashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Blink,
}

pub fn render_menu(frame: &mut Frame, menu: &Menu, highlight: Highlight) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO.len() as u16 + 2), // Logo
            Constraint::Length(MenuItem::ALL.len() as u16 + 2), // Entries
            Constraint::Length(3), // Controls
            Constraint::Min(0),
        ])
        .split(frame.area());

    let logo: Vec<Line> = LOGO.iter().map(|&l| Line::from(l)).collect();
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(logo_widget, chunks[0]);

    let selected_bg = match highlight {
        Highlight::Normal => Color::Red,
        Highlight::Blink => Color::Blue,
    };
    let entries: Vec<Line> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == menu.selected_index() {
                Line::from(Span::styled(
                    format!("  > {}  ", item.label()),
                    Style::default()
                        .bg(selected_bg)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("    {}", item.label()),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();
    let entries_widget = Paragraph::new(entries).block(Block::default().borders(Borders::ALL));
    frame.render_widget(entries_widget, chunks[1]);

    render_hint(frame, "UP/DOWN move | ENTER/SPACE select | ESC quit", chunks[2]);
}

pub fn render_score(frame: &mut Frame, score: &Score) {
    let area = centered(frame.area(), 56, 8);
    let lines = vec![
        Line::from(vec![
            Span::styled("Player 1 / You", Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled("Player 2 / AI", Style::default().fg(Color::Yellow)),
            Span::raw("   "),
            Span::styled("Draw", Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(format!(
            "{:^14}   {:^13}   {:^4}",
            score.player_one, score.player_two, score.draws
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to return...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("SCORE (this run only)"),
    );
    frame.render_widget(widget, area);
}

pub fn render_help(frame: &mut Frame) {
    let area = centered(frame.area(), 72, 16);
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::White));
    let lines = vec![
        Line::from(Span::styled(
            "Controls:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![key("UP / DOWN         "), Span::raw(" - Move the menu selector")]),
        Line::from(vec![key("LEFT / RIGHT      "), Span::raw(" - Move the column arrow")]),
        Line::from(vec![key("ENTER or SPACE    "), Span::raw(" - Drop a chip")]),
        Line::from(vec![key("1 - 7             "), Span::raw(" - Drop into that column")]),
        Line::from(vec![key("R / r             "), Span::raw(" - Reset the game")]),
        Line::from(vec![key("Q / ESC           "), Span::raw(" - Return to menu")]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Goal: ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("Connect "),
            Span::styled("4", Style::default().fg(Color::Red)),
            Span::raw(" chips in a row (horizontal, vertical, or diagonal)"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to return...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("HOW TO PLAY"));
    frame.render_widget(widget, area);
}

fn render_hint(frame: &mut Frame, text: &str, area: Rect) {
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// A `width` x `height` rectangle in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(render: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(render).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_menu_marks_selected_entry() {
        let mut menu = Menu::new();
        menu.down();
        let text = draw(|f| render_menu(f, &menu, Highlight::Normal));
        assert!(text.contains("  > Play vs AI [EZ MODE]"));
        assert!(text.contains("    Play PvP [I have friends]"));
        assert!(text.contains("ESC quit"));
    }

    #[test]
    fn test_score_screen_shows_counters() {
        let score = Score {
            draws: 3,
            player_one: 12,
            player_two: 7,
        };
        let text = draw(|f| render_score(f, &score));
        assert!(text.contains("SCORE"));
        assert!(text.contains("12"));
        assert!(text.contains('7'));
        assert!(text.contains('3'));
    }

    #[test]
    fn test_help_screen_explains_goal() {
        let text = draw(render_help);
        assert!(text.contains("HOW TO PLAY"));
        assert!(text.contains("chips in a row"));
    }

    #[test]
    fn test_centered_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered(area, 56, 8);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
        let rect = centered(Rect::new(0, 0, 80, 30), 56, 8);
        assert_eq!(rect, Rect::new(12, 11, 56, 8));
    }
}
