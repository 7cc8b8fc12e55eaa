//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The summary is recomputed whenever the scope changes and cached until the
//! next change.

use crate::config::settings::Settings;
use crate::display::MonthDetail;
use crate::models::{Dataset, MonthlyRecord, Scope, Summary, ALL_UNITS};
use crate::services::{compute_summary, unit_list};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    /// Unit selector
    #[default]
    Sidebar,
    /// Chart panels
    Charts,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    MonthDetail(MonthDetail),
}

/// Main application state
pub struct App<'a> {
    pub dataset: &'a Dataset,

    pub settings: &'a Settings,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    /// Index into the scope selector (0 is every unit)
    pub selected_scope_index: usize,

    /// Scope the summary and charts currently reflect
    pub scope: Scope,

    /// Summary of `scope`
    pub summary: Summary,

    /// Index of the focused chart panel among the units in scope
    pub selected_panel_index: usize,

    /// Index of the highlighted month in the focused panel
    pub selected_month_index: usize,

    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App showing `initial` scope
    ///
    /// A unit scope that the dataset does not have falls back to every unit.
    pub fn new(dataset: &'a Dataset, settings: &'a Settings, initial: Scope) -> Self {
        let mut app = Self {
            dataset,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_scope_index: 0,
            scope: Scope::All,
            summary: compute_summary(dataset, &Scope::All),
            selected_panel_index: 0,
            selected_month_index: 0,
            status_message: None,
        };

        match &initial {
            Scope::All => {}
            Scope::Unit(id) => match unit_list(dataset).iter().position(|u| *u == id.as_str()) {
                Some(index) => app.select_scope(index + 1),
                None => app.set_status(format!("Unit '{}' not found, showing all units", id)),
            },
        }

        app
    }

    /// Labels of the scope selector: every unit, then each unit
    pub fn scope_options(&self) -> Vec<&'a str> {
        std::iter::once(ALL_UNITS)
            .chain(self.dataset.unit_ids())
            .collect()
    }

    /// Number of entries in the scope selector
    pub fn scope_count(&self) -> usize {
        self.dataset.unit_count() + 1
    }

    /// Change the scope to selector entry `index` and recompute the summary
    pub fn select_scope(&mut self, index: usize) {
        let index = index.min(self.scope_count().saturating_sub(1));
        let scope = if index == 0 {
            Scope::All
        } else {
            self.dataset
                .unit_ids()
                .nth(index - 1)
                .map(Scope::unit)
                .unwrap_or_default()
        };

        self.selected_scope_index = index;
        if scope != self.scope {
            self.summary = compute_summary(self.dataset, &scope);
            self.scope = scope;
            self.selected_panel_index = 0;
            self.selected_month_index = 0;
        }
    }

    /// Units that get a chart panel under the current scope
    pub fn panel_units(&self) -> Vec<&'a str> {
        self.scope.resolve(self.dataset)
    }

    /// Unit of the focused chart panel
    pub fn selected_unit(&self) -> Option<&'a str> {
        self.panel_units().get(self.selected_panel_index).copied()
    }

    /// Records of the focused chart panel
    pub fn selected_records(&self) -> &'a [MonthlyRecord] {
        self.selected_unit()
            .and_then(|unit| self.dataset.records(unit))
            .unwrap_or_default()
    }

    /// Highlighted month of the focused chart panel
    pub fn selected_record(&self) -> Option<&'a MonthlyRecord> {
        self.selected_records().get(self.selected_month_index)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle focus between sidebar and charts
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Charts,
            FocusedPanel::Charts => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Open the detail popup for the highlighted month
    pub fn open_month_detail(&mut self) {
        match (self.selected_unit(), self.selected_record()) {
            (Some(unit), Some(record)) => {
                self.open_dialog(ActiveDialog::MonthDetail(MonthDetail::new(unit, record)));
            }
            _ => self.set_status("No month selected"),
        }
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_scope_index > 0 {
                    self.select_scope(self.selected_scope_index - 1);
                }
            }
            FocusedPanel::Charts => {
                if self.selected_panel_index > 0 {
                    self.selected_panel_index -= 1;
                    self.clamp_month();
                }
            }
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_scope_index + 1 < self.scope_count() {
                    self.select_scope(self.selected_scope_index + 1);
                }
            }
            FocusedPanel::Charts => {
                if self.selected_panel_index + 1 < self.panel_units().len() {
                    self.selected_panel_index += 1;
                    self.clamp_month();
                }
            }
        }
    }

    pub fn prev_month(&mut self) {
        self.selected_month_index = self.selected_month_index.saturating_sub(1);
    }

    pub fn next_month(&mut self) {
        if self.selected_month_index + 1 < self.selected_records().len() {
            self.selected_month_index += 1;
        }
    }

    fn clamp_month(&mut self) {
        let months = self.selected_records().len();
        self.selected_month_index = self.selected_month_index.min(months.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn record(month: &str, entry: i64, total: i64) -> MonthlyRecord {
        MonthlyRecord::new(
            month,
            Money::from_whole_cents(entry, 0),
            Money::zero(),
            Money::zero(),
            Money::from_whole_cents(total, 0),
        )
    }

    fn dataset() -> Dataset {
        Dataset::from_units([
            ("A101", vec![record("Jan", 1000, 250), record("Feb", 1200, 260)]),
            ("B202", vec![record("Jan", 500, 100)]),
        ])
    }

    #[test]
    fn test_starts_on_all_units() {
        let dataset = dataset();
        let settings = Settings::default();
        let app = App::new(&dataset, &settings, Scope::All);

        assert_eq!(app.scope, Scope::All);
        assert_eq!(app.summary.total_entry, Money::from_whole_cents(2700, 0));
        assert_eq!(app.scope_options(), vec!["all", "A101", "B202"]);
        assert_eq!(app.panel_units(), vec!["A101", "B202"]);
    }

    #[test]
    fn test_initial_unit_scope() {
        let dataset = dataset();
        let settings = Settings::default();
        let app = App::new(&dataset, &settings, Scope::unit("B202"));

        assert_eq!(app.selected_scope_index, 2);
        assert_eq!(app.summary.total_entry, Money::from_whole_cents(500, 0));
    }

    #[test]
    fn test_initial_missing_unit_falls_back_to_all() {
        let dataset = dataset();
        let settings = Settings::default();
        let app = App::new(&dataset, &settings, Scope::unit("Z999"));

        assert_eq!(app.scope, Scope::All);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_scope_change_recomputes_summary() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        app.move_down();
        assert_eq!(app.scope, Scope::unit("A101"));
        assert_eq!(app.summary.total_entry, Money::from_whole_cents(2200, 0));
        assert_eq!(app.summary.avg_entry, Money::from_whole_cents(1100, 0));
        assert_eq!(app.panel_units(), vec!["A101"]);

        app.move_down();
        app.move_down();
        assert_eq!(app.scope, Scope::unit("B202"));

        app.move_up();
        app.move_up();
        assert_eq!(app.scope, Scope::All);
        app.move_up();
        assert_eq!(app.selected_scope_index, 0);
    }

    #[test]
    fn test_chart_navigation_and_month_detail() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);
        app.toggle_panel_focus();

        app.next_month();
        app.next_month();
        assert_eq!(app.selected_month_index, 1);
        assert_eq!(app.selected_record().unwrap().month, "Feb");

        app.move_down();
        assert_eq!(app.selected_unit(), Some("B202"));
        assert_eq!(app.selected_month_index, 0);

        app.open_month_detail();
        match &app.active_dialog {
            ActiveDialog::MonthDetail(detail) => {
                assert_eq!(detail.unit, "B202");
                assert_eq!(detail.entry, Money::from_whole_cents(500, 0));
            }
            other => panic!("unexpected dialog: {:?}", other),
        }

        app.close_dialog();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_month_detail_without_months() {
        let dataset = Dataset::from_units([("C303", Vec::new())]);
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        app.open_month_detail();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("No month selected"));
    }
}
