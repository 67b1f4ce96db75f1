//! TUI rendering with ratatui
//!
//! Draws the board, on-screen keyboard, messages, and the game-over panel from an [`App`].

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Status};
use crate::output::{KEYBOARD_ROWS, rows_to_emoji, score_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(4),                          // Messages
            Constraint::Length(1),                       // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.is_game_over_visible() {
        render_game_over(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn cell(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let pending = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for (index, row) in state.rows().iter().enumerate() {
        let revealed = app.revealed_cells(index);
        let spans: Vec<Span> = row
            .word
            .text()
            .chars()
            .zip(row.feedback.marks())
            .enumerate()
            .map(|(col, (letter, mark))| {
                if col < revealed {
                    cell(letter, mark_style(*mark))
                } else {
                    cell(letter, pending)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if !state.is_complete() {
        let typed: Vec<char> = state.current_guess().chars().collect();
        let style = if app.is_shaking() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            pending
        };
        let mut spans: Vec<Span> = (0..WORD_LENGTH)
            .map(|col| match typed.get(col) {
                Some(&letter) => cell(letter, style),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            })
            .collect();
        if app.is_shaking() {
            spans.insert(0, Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = app.keyboard().get(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        mark_style,
                    );
                    cell(char::from(letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = app.state();
    let attempts = format!("Guesses: {}/{MAX_ATTEMPTS}", state.attempts_used());
    f.render_widget(Paragraph::new(attempts).alignment(Alignment::Center), chunks[0]);

    let saving = if app.game().is_persistent() {
        "Saving: on"
    } else {
        "Saving: off"
    };
    f.render_widget(Paragraph::new(saving).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl-R: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let state = app.state();
    let (title, color) = match state.status() {
        Status::Won => (" Solved! ", Color::Green),
        _ => (" Game over ", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("The word was {}", state.secret().text().to_uppercase()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Wordle {}", score_line(state))),
        Line::from(""),
    ];
    lines.extend(rows_to_emoji(state).lines().map(|row| Line::from(row.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Ctrl-R: new puzzle   Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let area = centered(f.area(), 36, lines.len() as u16 + 2);
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

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
