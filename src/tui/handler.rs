//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key closes a dialog
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('a') => {
            app.select_scope(0);
            return Ok(());
        }
        KeyCode::Esc => {
            app.clear_status();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Charts => handle_charts_key(app, key),
    }
    Ok(())
}

/// Handle keys when the unit selector is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_scope(0),
        KeyCode::Char('G') | KeyCode::End => app.select_scope(app.scope_count()),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Charts;
        }
        _ => {}
    }
}

/// Handle keys when the chart panels are focused
fn handle_charts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_month(),
        KeyCode::Char('l') | KeyCode::Right => app.next_month(),
        KeyCode::Enter => app.open_month_detail(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{Dataset, Money, MonthlyRecord, Scope};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn dataset() -> Dataset {
        let record = |month: &str| {
            MonthlyRecord::new(
                month,
                Money::from_whole_cents(1000, 0),
                Money::zero(),
                Money::zero(),
                Money::from_whole_cents(300, 0),
            )
        };
        Dataset::from_units([
            ("A101", vec![record("Jan"), record("Feb")]),
            ("B202", vec![record("Jan")]),
        ])
    }

    #[test]
    fn test_quit() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_selects_scope() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scope, Scope::unit("A101"));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.scope, Scope::unit("B202"));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.scope, Scope::All);
    }

    #[test]
    fn test_enter_opens_month_detail_and_any_key_closes() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        match &app.active_dialog {
            ActiveDialog::MonthDetail(detail) => assert_eq!(detail.month, "Feb"),
            other => panic!("unexpected dialog: {:?}", other),
        }

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_dialog() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, Scope::All);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
    }
}
