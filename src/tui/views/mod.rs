//! TUI Views module
//!
//! Contains the four main screens - dashboard, expenses, add-expense,
//! budget - plus the sidebar and status bar.

pub mod budget;
pub mod dashboard;
pub mod entry_form;
pub mod expenses;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout};
use super::widgets::notification::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => {
            dashboard::render(frame, app, layout.main);
        }
        ActiveView::Expenses => {
            expenses::render(frame, app, layout.main);
        }
        ActiveView::AddExpense => {
            entry_form::render(frame, app, layout.main);
        }
        ActiveView::Budget => {
            budget::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    // Transient banner (success messages), drawn over the main panel
    if let Some(notification) = app.notifications.current() {
        let area = notification_rect(layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::Tour => {
            dialogs::tour::render(frame, app);
        }
        ActiveDialog::EditBudget => {
            dialogs::edit_budget::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
