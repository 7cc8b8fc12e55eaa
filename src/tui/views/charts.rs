//! Monthly comparison charts
//!
//! One grouped bar chart per unit in scope: income (green) next to total
//! expenses (red) for every month, in record order.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_compact;
use crate::models::Money;
use crate::reports::{MonthlyComparison, UnitPanel};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::chart_panels;

/// Render the visible chart panels
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let comparison = MonthlyComparison::generate(app.dataset, &app.scope);

    if comparison.panels.is_empty() {
        let paragraph = Paragraph::new("No units in scope")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Income vs Expenses ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let (first, areas) = chart_panels(area, comparison.panels.len(), app.selected_panel_index);

    for (offset, panel_area) in areas.into_iter().enumerate() {
        let index = first + offset;
        if let Some(panel) = comparison.panels.get(index) {
            render_panel(frame, app, panel, index, panel_area);
        }
    }
}

fn render_panel(frame: &mut Frame, app: &App, panel: &UnitPanel, index: usize, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Charts && index == app.selected_panel_index;
    let currency = &app.settings.currency;
    let max = panel.max_value();

    let block = Block::default()
        .title(format!(
            " {}  (max {}) ",
            panel.unit,
            format_compact(max, currency)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    if panel.months.is_empty() {
        let paragraph = Paragraph::new("No months recorded")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(app.settings.chart.tui_bar_width)
        .bar_gap(0)
        .group_gap(2)
        .max(bar_height(max).max(1));

    for (month_index, month) in panel.months.iter().enumerate() {
        let label_style = if focused && month_index == app.selected_month_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };

        let bars = [
            Bar::default()
                .value(bar_height(month.entry))
                .text_value(format_compact(month.entry, currency))
                .style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::Black).bg(Color::Green)),
            Bar::default()
                .value(bar_height(month.total))
                .text_value(format_compact(month.total, currency))
                .style(Style::default().fg(Color::Red))
                .value_style(Style::default().fg(Color::Black).bg(Color::Red)),
        ];

        chart = chart.data(
            BarGroup::default()
                .label(Line::styled(month.month.clone(), label_style))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

/// Bar height in whole reais, negatives drawn as empty
fn bar_height(amount: Money) -> u64 {
    amount.whole().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(Money::from_cents(250_099)), 2500);
        assert_eq!(bar_height(Money::from_cents(-100)), 0);
        assert_eq!(bar_height(Money::zero()), 0);
    }
}
