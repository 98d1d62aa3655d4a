//! TUI rendering with ratatui
//!
//! The board, the on-screen Danish keyboard, and the score panel.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::engine::{GUESS_LIMIT, GameState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Rows of the Danish keyboard layout
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiopå", "asdfghjklæø", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.session.state().is_terminal() && app.session.state() != GameState::None {
        render_game_over_overlay(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🇩🇰 ORDLE - Danish Wordle")
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

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Close => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.session.word_length().as_usize();
    let mut lines: Vec<Line> = vec![Line::default()];

    for row in 0..GUESS_LIMIT {
        let mut spans: Vec<Span> = vec![Span::raw("  ")];

        if let Some(record) = app.session.records().get(row) {
            for (ch, &verdict) in record.word.chars().iter().zip(&record.verdicts) {
                spans.push(cell(*ch, verdict_style(verdict)));
                spans.push(Span::raw(" "));
            }
        } else if row == app.session.current_guess_index()
            && app.session.state() == GameState::Ongoing
        {
            let current = app.session.current_guess();
            let cursor = app
                .session
                .edit_index()
                .unwrap_or(current.len());
            for col in 0..word_length {
                let ch = current.get(col).copied().unwrap_or(' ');
                let mut style = Style::default().fg(Color::White).bg(Color::Black);
                if col == cursor {
                    style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                }
                spans.push(cell(ch, style));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..word_length {
                spans.push(cell(' ', Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn cell(ch: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", ch.to_uppercase()), style)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    render_score_panel(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score_panel(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Difficulty:  "),
            Span::styled(
                app.session.difficulty().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!("Word length: {}", app.session.word_length())),
        Line::from(format!("Game score:  {}", app.session.score())),
        Line::from(format!("Run total:   {}", app.total)),
        Line::from(format!("Win streak:  {}", app.session.wins_in_a_row())),
        Line::from(format!("High score:  {}", app.settings.high_score)),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
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

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(KEYBOARD_ROWS.len());

    for row in KEYBOARD_ROWS {
        let mut spans: Vec<Span> = Vec::new();
        for key in row.chars() {
            let state = app.session.key_state(key);
            let mut style = match state.verdict {
                Some(verdict) => verdict_style(verdict),
                None => Style::default().fg(Color::White),
            };
            if state.forbidden {
                style = Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT);
            } else if state.disabled {
                style = style.add_modifier(Modifier::DIM);
            }
            spans.push(Span::styled(format!(" {} ", key.to_uppercase()), style));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.session.state() == GameState::Ongoing {
        "Type letters | Enter: submit | ←/→: edit | Esc: give up | Ctrl+C: quit"
    } else {
        "n: new game | 1/2/3: difficulty | 5/6/7: word length | q: quit"
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_game_over_overlay(f: &mut Frame, app: &App) {
    let Some(resolution) = &app.last_resolution else {
        return;
    };
    let area = centered_rect(44, 14, f.area());

    let (title, color) = match app.session.state() {
        GameState::Won => (" 🎉 You won! ", Color::Green),
        GameState::Lost => (" ❌ Out of guesses ", Color::Red),
        GameState::GaveUp => (" 🏳️ Gave up ", Color::Yellow),
        GameState::None | GameState::Ongoing => return,
    };

    let target = app
        .session
        .target()
        .map_or_else(String::new, |word| word.text().to_uppercase());

    let tally = resolution.tally;
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                target,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(format!("Guess points:    {:>6}", tally.guess_points)),
    ];
    if app.session.state() == GameState::Won {
        lines.push(Line::from(format!("Time bonus:      {:>6}", tally.time_bonus)));
        lines.push(Line::from(format!(
            "Spots left:      {:>6}",
            tally.spots_left_bonus
        )));
        lines.push(Line::from(format!(
            "Win streak:      {:>6}",
            tally.win_streak_bonus
        )));
    }
    lines.push(Line::from(vec![
        Span::raw("Total:           "),
        Span::styled(
            format!("{:>6}", tally.total()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press 'n' for a new word or 'q' to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let overlay = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(overlay, area);
}

/// Center a fixed-size rect inside the available area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
