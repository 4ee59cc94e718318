//! Application state for the TUI
//!
//! The App struct owns the record store (single writer) and all state
//! needed for rendering and handling events. Views and dialogs receive
//! it by reference; mutation happens only through the store's
//! enumerated operations.

use crate::config::TrackerPaths;
use crate::engine::ExpenseQuery;
use crate::models::{Category, Expense};
use crate::store::ExpenseStore;

use super::dialogs::edit_budget::EditBudgetState;
use super::dialogs::tour::TourState;
use super::views::entry_form::EntryFormState;
use super::widgets::input::TextInput;
use super::widgets::notification::{Notification, NotificationQueue};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Expenses,
    AddExpense,
    Budget,
}

impl ActiveView {
    /// Screen title shown in headers and the sidebar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expense History",
            Self::AddExpense => "Add Expense",
            Self::Budget => "Budget Management",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Tour,
    EditBudget,
}

/// Main application state
pub struct App {
    /// The record store (owned; the single writer)
    pub store: ExpenseStore,

    /// Paths configuration
    pub paths: TrackerPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Filter/sort query for the expense history screen
    pub query: ExpenseQuery,

    /// Search box backing the query's substring filter
    pub search_input: TextInput,

    /// Selected row in the (filtered) expense table
    pub selected_expense_index: usize,

    /// Selected row in the budget table
    pub selected_category_index: usize,

    /// Entry form state for the add-expense screen
    pub entry_form: EntryFormState,

    /// Budget cap edit dialog state
    pub edit_budget: EditBudgetState,

    /// Onboarding tour state
    pub tour: TourState,

    /// Transient banners (success messages)
    pub notifications: NotificationQueue,

    /// Status message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(store: ExpenseStore, paths: TrackerPaths) -> Self {
        Self {
            store,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            query: ExpenseQuery::new(),
            search_input: TextInput::new().placeholder("Search expenses..."),
            selected_expense_index: 0,
            selected_category_index: 0,
            entry_form: EntryFormState::new(),
            edit_budget: EditBudgetState::new(),
            tour: TourState::new(),
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Push a success banner
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::success(message));
    }

    /// Switch to a different screen
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.input_mode = InputMode::Normal;

        match view {
            ActiveView::Expenses => {
                self.selected_expense_index = 0;
            }
            ActiveView::Budget => {
                self.selected_category_index = 0;
            }
            ActiveView::AddExpense => {
                // Fresh form every time the screen is entered
                self.entry_form = EntryFormState::new();
                self.input_mode = InputMode::Editing;
                self.focused_panel = FocusedPanel::Main;
            }
            ActiveView::Dashboard => {}
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::Tour {
            self.tour.restart();
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The expense list as filtered and sorted by the current query
    pub fn filtered_expenses(&self) -> Vec<Expense> {
        self.query.apply(self.store.expenses())
    }

    /// Sync the query's search filter from the search box and reset selection
    pub fn apply_search(&mut self) {
        self.query.search = self.search_input.value().to_string();
        self.selected_expense_index = 0;
    }

    /// Clear both filters and the search box
    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        self.query.clear_filters();
        self.selected_expense_index = 0;
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Expenses => {
                self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
            }
            ActiveView::Budget => {
                self.selected_category_index = self.selected_category_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self) {
        match self.active_view {
            ActiveView::Expenses => {
                let max = self.filtered_expenses().len();
                if self.selected_expense_index + 1 < max {
                    self.selected_expense_index += 1;
                }
            }
            ActiveView::Budget => {
                if self.selected_category_index + 1 < Category::ALL.len() {
                    self.selected_category_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Delete the expense currently selected in the filtered table
    pub fn delete_selected_expense(&mut self) {
        let filtered = self.filtered_expenses();
        if let Some(expense) = filtered.get(self.selected_expense_index) {
            let description = expense.description.clone();
            self.store.delete_expense(expense.id);
            self.set_status(format!("Deleted '{}'", description));

            // Keep the selection in bounds after removal
            let remaining = self.filtered_expenses().len();
            if self.selected_expense_index >= remaining {
                self.selected_expense_index = remaining.saturating_sub(1);
            }
        }
    }

    /// The category currently selected in the budget table
    pub fn selected_category(&self) -> Category {
        Category::ALL[self.selected_category_index.min(Category::ALL.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp.path().to_path_buf());
        (App::new(ExpenseStore::with_sample_data(), paths), temp)
    }

    #[test]
    fn test_switch_view_resets_selection() {
        let (mut app, _tmp) = app();
        app.selected_expense_index = 3;
        app.switch_view(ActiveView::Expenses);
        assert_eq!(app.selected_expense_index, 0);
    }

    #[test]
    fn test_add_expense_view_enters_editing() {
        let (mut app, _tmp) = app();
        app.switch_view(ActiveView::AddExpense);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_delete_selected_expense_clamps_selection() {
        let (mut app, _tmp) = app();
        app.switch_view(ActiveView::Expenses);

        // Select the last row, delete it; selection must stay in bounds
        let count = app.filtered_expenses().len();
        app.selected_expense_index = count - 1;
        app.delete_selected_expense();

        assert_eq!(app.filtered_expenses().len(), count - 1);
        assert_eq!(app.selected_expense_index, count - 2);
    }

    #[test]
    fn test_delete_respects_active_filter() {
        let (mut app, _tmp) = app();
        app.switch_view(ActiveView::Expenses);
        app.query.category = Some(Category::Transportation);

        // The only Transportation expense is "Gas"
        app.selected_expense_index = 0;
        app.delete_selected_expense();

        assert!(app
            .store
            .expenses()
            .iter()
            .all(|e| e.category != Category::Transportation));
        assert_eq!(app.store.expenses().len(), 3);
    }

    #[test]
    fn test_apply_search_resets_selection() {
        let (mut app, _tmp) = app();
        app.selected_expense_index = 2;
        app.search_input = TextInput::new().content("bill");
        app.apply_search();

        assert_eq!(app.query.search, "bill");
        assert_eq!(app.selected_expense_index, 0);
        assert_eq!(app.filtered_expenses().len(), 1);
    }

    #[test]
    fn test_budget_selection_bounds() {
        let (mut app, _tmp) = app();
        app.switch_view(ActiveView::Budget);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_category(), Category::Other);
        for _ in 0..10 {
            app.move_up();
        }
        assert_eq!(app.selected_category(), Category::Food);
    }

    #[test]
    fn test_tour_dialog_restarts_at_first_step() {
        let (mut app, _tmp) = app();
        app.open_dialog(ActiveDialog::Tour);
        app.tour.next();
        app.close_dialog();

        app.open_dialog(ActiveDialog::Tour);
        assert_eq!(app.tour.step, 0);
    }
}
