//! Layout definitions for the TUI
//!
//! Sidebar with the unit selector on the left; header, summary cards and
//! chart panels on the right; status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one chart panel, borders included
pub const CHART_PANEL_HEIGHT: u16 = 14;

/// Layout regions for the TUI
pub struct AppLayout {
    pub sidebar: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the dashboard panel
pub struct DashboardLayout {
    /// Title and subtitle
    pub header: Rect,
    /// The four summary cards
    pub cards: [Rect; 4],
    /// Chart panels
    pub charts: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Cards
                Constraint::Min(3),    // Charts
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);

        Self {
            header: chunks[0],
            cards: [cards[0], cards[1], cards[2], cards[3]],
            charts: chunks[2],
        }
    }
}

/// Split the chart area into the visible panels
///
/// Returns `(first_visible_index, areas)` so that `selected` is always one of
/// the visible panels.
pub fn chart_panels(area: Rect, panel_count: usize, selected: usize) -> (usize, Vec<Rect>) {
    if panel_count == 0 {
        return (0, Vec::new());
    }

    let fits = ((area.height / CHART_PANEL_HEIGHT) as usize).max(1);
    let visible = fits.min(panel_count);
    let first = selected.saturating_sub(visible - 1).min(panel_count - visible);

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, visible as u32); visible])
        .split(area)
        .to_vec();

    (first, areas)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_panels_fit() {
        let area = Rect::new(0, 0, 80, CHART_PANEL_HEIGHT * 2);
        let (first, areas) = chart_panels(area, 5, 0);
        assert_eq!(first, 0);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_chart_panels_follow_selection() {
        let area = Rect::new(0, 0, 80, CHART_PANEL_HEIGHT * 2);
        let (first, areas) = chart_panels(area, 5, 4);
        assert_eq!(first, 3);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_chart_panels_small_area_shows_one() {
        let area = Rect::new(0, 0, 80, 5);
        let (first, areas) = chart_panels(area, 3, 2);
        assert_eq!(first, 2);
        assert_eq!(areas.len(), 1);
    }

    #[test]
    fn test_chart_panels_empty() {
        let (_, areas) = chart_panels(Rect::new(0, 0, 80, 40), 0, 0);
        assert!(areas.is_empty());
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(r, Rect::new(40, 20, 20, 10));
    }
}
