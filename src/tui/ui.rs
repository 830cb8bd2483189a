//! Stateless UI rendering for the terminal front end.

use super::app::App;
use super::input::Focus;
use crate::{Cell, CellView, GameView, Mark, Outcome, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BOARD_WIDTH: u16 = 12 + 1 + 12 + 1 + 12;

const SEPARATOR: &str = "────────────┼────────────┼────────────";

const REWOUND_NOTE: &str = " next move drops later entries ";

const HELP: &str = "Arrows/Enter or 1-9: place | Tab: history | [ ]: step | Home: start | r: reset | q: quit";

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let show_help = *app.settings().show_help();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // Title
            Constraint::Length(3),
            // Board + history
            Constraint::Min(13),
            // Status
            Constraint::Length(3),
            // Help
            Constraint::Length(if show_help { 1 } else { 0 }),
        ])
        .split(frame.area());

    let title = Paragraph::new(app.settings().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, panels[0], &view, app);
    draw_history(frame, panels[1], &view, app);
    draw_status(frame, chunks[2], &view, app);

    if show_help {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::Board;
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, 11);
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

    for (row, cells) in view.cells().chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], cells, focused.then_some(app.cursor()));
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], cursor: Option<Position>) {
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

    for (col, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], cell, cursor);
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Option<Position>) {
    let (symbol, mut style) = match cell.cell() {
        Cell::Empty => (
            format!("{}", cell.position().index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => (mark.to_string(), mark_style(*mark)),
    };

    if *cell.winning() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor == Some(*cell.position()) {
        style = if *cell.clickable() {
            style.bg(Color::White).fg(Color::Black)
        } else {
            style.add_modifier(Modifier::REVERSED)
        };
    }

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(SEPARATOR).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let marker = if *entry.active() { "▶ " } else { "  " };
            let mut spans = vec![Span::raw(marker), Span::raw(entry.label().clone())];
            if let Some((mark, pos)) = entry.placed() {
                spans.push(Span::styled(
                    format!("  {} {}", mark, pos),
                    mark_style(*mark).remove_modifier(Modifier::BOLD),
                ));
            }
            let style = if *entry.active() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let mut block = Block::default().title("Game History");
    if app.engine().history().is_rewound() {
        let note = Line::from(REWOUND_NOTE).style(Style::default().fg(Color::Yellow));
        block = block.title_bottom(note);
    }
    let list = List::new(items)
        .block(
            block
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let color = match view.outcome() {
        Outcome::InProgress => mark_color(*view.to_move()),
        Outcome::Won(_) => Color::Green,
        Outcome::Draw => Color::Yellow,
    };
    let mut spans = vec![Span::styled(
        view.status().clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(ignored) = app.last_ignored() {
        spans.push(Span::styled(
            format!("   ({})", ignored),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn mark_style(mark: Mark) -> Style {
    Style::default()
        .fg(mark_color(mark))
        .add_modifier(Modifier::BOLD)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
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
