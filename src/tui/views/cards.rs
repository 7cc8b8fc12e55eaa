//! Summary cards
//!
//! Total income, total expenses, balance and monthly average of the scope.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_money;
use crate::reports::summary_cards;
use crate::tui::app::App;

const CARD_COLORS: [Color; 4] = [Color::Green, Color::Red, Color::Cyan, Color::Yellow];

/// Render the four cards into `areas`
pub fn render(frame: &mut Frame, app: &App, areas: [Rect; 4]) {
    let cards = summary_cards(&app.summary);

    for (((label, amount), color), area) in cards.into_iter().zip(CARD_COLORS).zip(areas) {
        // Balance turns red when expenses exceed income
        let color = if amount.is_negative() { Color::Red } else { color };

        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(format_money(amount, &app.settings.currency))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(block);

        frame.render_widget(paragraph, area);
    }
}
