//! TUI rendering with ratatui
//!
//! Draws the game board, the hint keyboard and the status panes.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterState;
use crate::core::alphabet::KEYBOARD_ROWS;
use crate::output::formatters::format_time_remaining;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now_millis: i64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Board and side panel
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, now_millis, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "SŁÓWKO — tryb {}, nr {}",
        app.game.mode().name().to_lowercase(),
        app.game.word_number()
    );
    let header = Paragraph::new(title)
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

fn cell_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn letter_cell(ch: Option<char>, state: LetterState) -> Span<'static> {
    let text = match ch {
        Some(ch) => format!(" {} ", ch.to_uppercase()),
        None => " · ".to_string(),
    };
    Span::styled(text, cell_style(state))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.game.board();
    let mut lines: Vec<Line> = vec![Line::from("")];

    // Committed rows
    for row in board.rows() {
        let mut spans = vec![Span::raw("  ")];
        for (i, &ch) in row.guess().chars().iter().enumerate() {
            spans.push(letter_cell(Some(ch), row.row().state_at(i)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // The row being typed
    if app.input_mode == InputMode::Typing {
        let mut spans = vec![Span::raw("  ")];
        for ch in app.current_row_letters() {
            spans.push(letter_cell(ch, LetterState::Empty));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Remaining empty rows
    let used = board.attempts() + usize::from(app.input_mode == InputMode::Typing);
    for _ in used..board.max_attempts() {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..board.word_length() {
            spans.push(letter_cell(None, LetterState::Empty));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Plansza ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.keyboard();
    let mut lines = vec![Line::from("")];

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = vec![Span::raw(" ".repeat(i + 1))];
        for ch in row.chars() {
            spans.push(Span::styled(
                format!("{} ", ch.to_uppercase()),
                cell_style(keyboard.state_of(ch)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Klawiatura ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Rozegranych:  {}", stats.played())),
        Line::from(format!(
            "Wygranych:    {} ({:.0}%)",
            stats.won(),
            stats.win_rate()
        )),
    ];
    if app.game.mode().has_streak() {
        lines.push(Line::from(format!("Seria:        {}", stats.streak())));
        lines.push(Line::from(format!("Rekord serii: {}", stats.max_streak())));
    }
    if app.game.hard() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tryb trudny",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statystyki ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
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
        List::new(messages).block(Block::default().title(" Komunikaty ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, now_millis: i64, area: Rect) {
    let countdown = app
        .countdown(now_millis)
        .map(|remaining| format!("następne słówko za {}", format_time_remaining(remaining)));

    let help = match app.input_mode {
        InputMode::Typing => "Enter zatwierdza | Backspace kasuje | Esc wychodzi",
        InputMode::GameOver => "'n' nowa gra | Esc wychodzi",
    };

    let text = match countdown {
        Some(countdown) => format!(" {help} | {countdown} "),
        None => format!(" {help} "),
    };

    let status = Paragraph::new(text).style(Style::default().fg(Color::Gray)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
