//! Stateless UI rendering.

use super::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use versus_core::{Cell, Snapshot, Square, Symbol};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and side panels
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = match app.snapshot().result_message() {
        Some(result) => Paragraph::new(format!("Game over - {}", result))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        None => Paragraph::new("Versus - Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    }
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(chunks[1]);

    draw_board(frame, body[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(body[1]);
    draw_players(frame, side[0], app);
    draw_log(frame, side[1], app.snapshot());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = match app.mode() {
        Mode::Playing => {
            "arrows move  enter/space/1-9 play  r restart  d difficulty  n/b rename  q quit"
        }
        Mode::Renaming { .. } => "type a name  enter save  esc cancel",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, Cell::ALL[row * 3 + col]);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let snapshot = app.snapshot();
    let on_winning_line = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&cell));

    let (text, base_style) = match snapshot.board.get(cell) {
        Square::Empty => (
            format!(" {} ", cell.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(symbol) => {
            let color = match symbol {
                Symbol::X => Color::Blue,
                Symbol::O => Color::Red,
            };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            // Played cells are not selectable.
            let style = if on_winning_line {
                style.bg(Color::Green).fg(Color::Black)
            } else {
                style.add_modifier(Modifier::DIM)
            };
            (format!(" {} ", symbol), style)
        }
    };

    let style = if cell == app.cursor() && !snapshot.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();

    let mut lines: Vec<Line> = Symbol::iter()
        .map(|symbol| {
            let name = match app.mode() {
                Mode::Renaming {
                    symbol: editing,
                    buffer,
                } if *editing == symbol => format!("{}_", buffer),
                _ => snapshot.players.name(symbol).to_string(),
            };
            let style = if symbol == snapshot.active_player && !snapshot.is_over() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}: {}", symbol, name), style))
        })
        .collect();

    lines.push(Line::from(format!("Difficulty: {}", snapshot.difficulty)));
    if snapshot.thinking {
        lines.push(Line::from(Span::styled(
            "thinking...",
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    let players =
        Paragraph::new(lines).block(Block::default().title("Players").borders(Borders::ALL));
    frame.render_widget(players, area);
}

fn draw_log(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let items: Vec<ListItem> = snapshot
        .turn_log
        .iter()
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();

    let log = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(log, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
