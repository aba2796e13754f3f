//! TUI rendering with ratatui
//!
//! Board tiles, on-screen keyboard, hint and message panels.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, WORD_LEN, Verdict};
use crate::game::{KeyStatus, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Min(MAX_ATTEMPTS as u16 + 4),      // Main content
            Constraint::Length(KEY_ROWS.len() as u16 + 2), // Keyboard
            Constraint::Length(3),                         // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - board on the left, hint and messages on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let header = Paragraph::new(format!(
        "🎯 WORDLE TIERS - Score: {} | Level: {} | Streak: {}",
        stats.score,
        app.game.level().name().to_uppercase(),
        stats.streak
    ))
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let revealed = app.game.revealed();
    let board = app.game.board();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);

        for col in 0..WORD_LEN {
            let (text, style) = if let Some(scored) = revealed.get(row) {
                let letter = scored.guess.as_bytes()[col] as char;
                (format!(" {letter} "), verdict_style(scored.feedback.verdicts()[col]))
            } else if let Some(letter) = board.letter(row, col) {
                (
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" · ".to_string(), Style::default().fg(Color::DarkGray))
            };

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.hint, app.game.phase()) {
        (Some(hint), _) => Line::from(vec![
            Span::styled("Definition: ", Style::default().fg(Color::Yellow)),
            Span::raw(hint.clone()),
        ]),
        (None, Phase::AwaitingHint) => Line::from("Fetching hint..."),
        (None, _) => Line::from(Span::styled(
            "No hint for this round.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = match keyboard.status(letter) {
                        Some(KeyStatus::Exact) => {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        }
                        Some(KeyStatus::Present) => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        Some(KeyStatus::Absent) => {
                            Style::default().fg(Color::White).bg(Color::DarkGray)
                        }
                        None => Style::default().fg(Color::White),
                    };
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.game.phase() {
        Phase::AwaitingHint => "Preparing round...",
        Phase::InProgress => "Type letters · Enter: submit · Backspace: delete · Esc: quit",
        Phase::Won | Phase::Lost => "n: next round · q: quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

const fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}
