//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use super::app::{App, Focus};
use crate::games::tictactoe::{
    NO_MOVES_LEFT, Player, Position, Segment, View, geometry::GRID_FRAME,
};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders one frame: title, board with overlay, history list, status.
pub fn draw(frame: &mut Frame, app: &mut App, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(5), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board_panel(frame, body[0], app, view);
    draw_history(frame, body[1], app, view);
    draw_status(frame, chunks[2], app, view);

    let help = Paragraph::new(
        "arrows move · enter/space play · 1-9 play · tab history · r restart · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board_panel(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);

    let overlay = overlay_line(app, view);
    // The overlay canvas resets cell backgrounds, so no cursor under it.
    let cursor = match overlay {
        Some(_) => None,
        None => Some(app.cursor()),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, view, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    if let Some(segment) = overlay {
        draw_win_line(frame, board_area, segment);
    }
}

/// Segment to strike through the board, if any is enabled and drawable.
fn overlay_line(app: &App, view: &View) -> Option<Segment> {
    view.win_line()
        .as_ref()
        .map(|line| line.segment)
        .filter(|segment| app.show_win_line() && !segment.is_degenerate())
}

fn draw_row(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, area, view, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match view.board()[pos.to_index()] {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the cell, so the glyph sits on the row's center.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(symbol, style))])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Overlays `segment` on the board, scaling from the pixel grid frame.
///
/// Canvas y grows upward, grid pixels grow downward.
fn draw_win_line(frame: &mut Frame, area: Rect, segment: Segment) {
    let flip = |y: f64| GRID_FRAME.top + GRID_FRAME.bottom - y;
    let canvas = Canvas::default()
        .x_bounds([GRID_FRAME.left, GRID_FRAME.right])
        .y_bounds([GRID_FRAME.top, GRID_FRAME.bottom])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(
                segment.start_x,
                flip(segment.start_y),
                segment.end_x,
                flip(segment.end_y),
                Color::Red,
            ));
        });
    frame.render_widget(canvas, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &mut App, view: &View) {
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let marker = if *entry.current() { "▶ " } else { "  " };
            let detail = entry
                .played()
                .as_ref()
                .map(|mov| format!(" ({})", mov))
                .unwrap_or_default();
            ListItem::new(format!("{}{}{}", marker, entry.label(), detail))
        })
        .collect();

    let list = List::new(items)
        .block(panel("History", app.focus() == Focus::History))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, app.history_state_mut());
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    let status_style = if view.win_line().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines = vec![Line::from(Span::styled(view.status().clone(), status_style))];
    if *view.no_moves_left() {
        lines.push(Line::from(Span::styled(
            NO_MOVES_LEFT,
            Style::default().fg(Color::Magenta),
        )));
    }
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
