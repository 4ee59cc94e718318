//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state: active dialog first, then editing mode
//! (form or search), then normal-mode navigation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, InputMode};
use super::dialogs;
use super::event::Event;
use super::views::entry_form;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            // Auto-dismiss banners whose display interval has elapsed
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs capture all input
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes the help dialog
            app.close_dialog();
        }
        ActiveDialog::Tour => {
            dialogs::tour::handle_key(app, key);
        }
        ActiveDialog::EditBudget => {
            dialogs::edit_budget::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in editing mode (entry form or search box)
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::AddExpense => {
            entry_form::handle_key(app, key);
        }
        ActiveView::Expenses => {
            handle_search_key(app, key);
        }
        _ => {
            // Editing mode only exists on those two screens
            app.input_mode = InputMode::Normal;
        }
    }
    Ok(())
}

/// Handle keys while the search box is being edited
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }

        KeyCode::Backspace => {
            app.search_input.backspace();
            app.apply_search();
        }

        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),

        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.apply_search();
        }

        _ => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
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

        KeyCode::Char('i') => {
            app.open_dialog(ActiveDialog::Tour);
            return Ok(());
        }

        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }

        KeyCode::Char('h') | KeyCode::Left => {
            if app.focused_panel == FocusedPanel::Main {
                app.focused_panel = FocusedPanel::Sidebar;
            }
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.focused_panel == FocusedPanel::Sidebar {
                app.focused_panel = FocusedPanel::Main;
            }
            return Ok(());
        }

        // Screen switching
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Expenses);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::AddExpense);
            return Ok(());
        }
        KeyCode::Char('4') => {
            app.switch_view(ActiveView::Budget);
            return Ok(());
        }

        // Selection movement
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return Ok(());
        }

        _ => {}
    }

    // Screen-specific keys
    match app.active_view {
        ActiveView::Expenses => handle_expenses_key(app, key),
        ActiveView::AddExpense => handle_add_expense_key(app, key),
        ActiveView::Budget => handle_budget_key(app, key),
        ActiveView::Dashboard => {}
    }

    Ok(())
}

/// Keys specific to the expense history screen
fn handle_expenses_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Edit the search filter
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
            app.focused_panel = FocusedPanel::Main;
        }

        // Cycle the category filter
        KeyCode::Char('c') => {
            app.query.cycle_category();
            app.selected_expense_index = 0;
        }

        // Cycle the sort key
        KeyCode::Char('s') => {
            app.query.sort_key = app.query.sort_key.next();
        }

        // Reverse the sort direction
        KeyCode::Char('r') => {
            app.query.direction = app.query.direction.toggled();
        }

        // Clear all filters
        KeyCode::Char('x') => {
            app.clear_filters();
        }

        // Delete the selected expense
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected_expense();
        }

        _ => {}
    }
}

/// Keys specific to the add-expense screen (normal mode)
fn handle_add_expense_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Resume editing the form
        KeyCode::Char('e') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
        }
        _ => {}
    }
}

/// Keys specific to the budget screen
fn handle_budget_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let category = app.selected_category();
            let current = app.store.budgets().cap(category);
            app.edit_budget.init(category, current);
            app.open_dialog(ActiveDialog::EditBudget);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::models::{Category, Money};
    use crate::store::ExpenseStore;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn app() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp.path().to_path_buf());
        (App::new(ExpenseStore::with_sample_data(), paths), temp)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_quit_key() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_screen_switching() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Expenses);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_view, ActiveView::Budget);
    }

    #[test]
    fn test_help_dialog_opens_and_any_key_closes() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Char('z'));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_search_typing_filters_live() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "gas".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.filtered_expenses().len(), 1);
        assert_eq!(app.filtered_expenses()[0].description, "Gas");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_delete_key_removes_selected() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('2'));
        let before = app.store.expenses().len();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.expenses().len(), before - 1);
    }

    #[test]
    fn test_form_submission_through_keys() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "Coffee".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "4.50".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        let added = app
            .store
            .expenses()
            .iter()
            .find(|e| e.description == "Coffee")
            .expect("expense added");
        assert_eq!(added.amount, Money::from_cents(450));
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_form_validation_blocks_submit() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('3'));
        let before = app.store.expenses().len();

        // Submit with everything empty except the default date
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.expenses().len(), before);
        assert!(app.entry_form.errors.any());
    }

    #[test]
    fn test_budget_edit_flow() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_dialog, ActiveDialog::EditBudget);

        // Replace Food's cap with 500
        for _ in 0..app.edit_budget.amount_input.len() {
            press(&mut app, KeyCode::Backspace);
        }
        for c in "500".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(
            app.store.budgets().cap(Category::Food),
            Money::from_dollars(500)
        );
    }

    #[test]
    fn test_budget_edit_rejects_invalid_and_keeps_mapping() {
        let (mut app, _tmp) = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);

        for _ in 0..app.edit_budget.amount_input.len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);

        // Dialog stays open with an error; the mapping is unchanged
        assert_eq!(app.active_dialog, ActiveDialog::EditBudget);
        assert!(app.edit_budget.error_message.is_some());
        assert_eq!(
            app.store.budgets().cap(Category::Food),
            Money::from_dollars(300)
        );
    }

    #[test]
    fn test_tick_expires_nothing_fresh() {
        let (mut app, _tmp) = app();
        app.notify_success("done");
        handle_event(&mut app, Event::Tick).unwrap();
        assert!(!app.notifications.is_empty());
    }
}
