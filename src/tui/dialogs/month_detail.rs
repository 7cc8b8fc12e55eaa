//! Month detail dialog
//!
//! Entrada, Taxas, Aluguel and Total Saídas of one unit-month.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::config::CurrencyFormat;
use crate::display::{format_money, MonthDetail};
use crate::tui::layout::centered_rect_fixed;

/// Render the detail popup
pub fn render(frame: &mut Frame, detail: &MonthDetail, currency: &CurrencyFormat) {
    let area: Rect = centered_rect_fixed(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let rows: Vec<Row> = detail
        .lines()
        .into_iter()
        .enumerate()
        .map(|(index, (label, amount))| {
            let color = match index {
                0 => Color::Green,
                3 => Color::Red,
                _ => Color::White,
            };
            Row::new(vec![
                Cell::from(label),
                Cell::from(Line::from(format_money(amount, currency)).alignment(Alignment::Right))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(16)])
        .column_spacing(2)
        .block(
            Block::default()
                .title(format!(" {} ", detail.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .title_bottom(Line::from(" any key to close ").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(table, area);
}
