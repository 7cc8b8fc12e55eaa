//! Sidebar view
//!
//! Shows the scope selector: every unit first, then each unit

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Units
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_units(frame, app, chunks[1]);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Rentboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the unit list
fn render_units(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Units ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = app
        .scope_options()
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let (text, color) = if index == 0 {
                ("All units".to_string(), Color::Yellow)
            } else {
                (label.to_string(), Color::White)
            };
            let months = if index == 0 {
                app.dataset.month_count()
            } else {
                app.dataset.records(label).map(<[_]>::len).unwrap_or(0)
            };

            ListItem::new(Line::from(vec![
                Span::styled(text, Style::default().fg(color)),
                Span::styled(
                    format!(" ({})", months),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_scope_index));

    frame.render_stateful_widget(list, area, &mut state);
}
