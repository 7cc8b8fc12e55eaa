//! TUI Views module
//!
//! The dashboard (header, cards, charts) plus the sidebar and status bar.

pub mod cards;
pub mod charts;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{AppLayout, DashboardLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    let dashboard = DashboardLayout::new(layout.main);
    render_header(frame, app, dashboard.header);
    cards::render(frame, app, dashboard.cards);
    charts::render(frame, app, dashboard.charts);

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Title with the scope being shown
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let subtitle = if app.scope.is_all() {
        format!("All units ({})", app.dataset.unit_count())
    } else {
        format!("Unit {}", app.scope)
    };

    let line = Line::from(vec![
        Span::styled(
            "Financial Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::MonthDetail(detail) => {
            dialogs::month_detail::render(frame, detail, &app.settings.currency)
        }
        ActiveDialog::None => {}
    }
}
