//! Status bar view
//!
//! Shows the scope, the highlighted month, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Scope: ", Style::default().fg(Color::White)),
        Span::styled(
            app.scope.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.focused_panel == FocusedPanel::Charts {
        if let (Some(unit), Some(record)) = (app.selected_unit(), app.selected_record()) {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                format!("{} · {}", unit, record.month),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.focused_panel {
        FocusedPanel::Sidebar => " q:Quit  ?:Help  Tab:Charts ",
        FocusedPanel::Charts => " q:Quit  ?:Help  h/l:Month  Enter:Detail ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
