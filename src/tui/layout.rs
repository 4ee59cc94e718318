//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! and the helpers for dialog and card placement.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (screen switcher)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
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
                Constraint::Length(24), // Sidebar (fixed width)
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

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// Screen switcher area
    pub nav: Rect,
    /// Help hint at the bottom
    pub footer: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Nav
                Constraint::Length(4), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            nav: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Layout for the dashboard view
pub struct DashboardLayout {
    /// Summary cards row
    pub cards: [Rect; 3],
    /// Per-category budget progress
    pub progress: Rect,
    /// Recent expenses panel
    pub recent: Rect,
    /// Over-budget alerts panel
    pub alerts: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Cards
                Constraint::Length(12),     // Progress bars
                Constraint::Min(6),         // Recent / alerts
            ])
            .split(area);

        let cards = card_row(rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self {
            cards,
            progress: rows[1],
            recent: bottom[0],
            alerts: bottom[1],
        }
    }
}

/// Layout for the expense history view
pub struct ExpensesLayout {
    /// Filter bar (search, category, sort)
    pub filters: Rect,
    /// Result count and filtered total line
    pub summary: Rect,
    /// Expense table
    pub table: Rect,
}

impl ExpensesLayout {
    /// Calculate expense view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Length(1), // Summary line
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            filters: chunks[0],
            summary: chunks[1],
            table: chunks[2],
        }
    }
}

/// Layout for the budget view
pub struct BudgetLayout {
    /// Summary cards row
    pub cards: [Rect; 3],
    /// Per-category cap table
    pub table: Rect,
}

impl BudgetLayout {
    /// Calculate budget view layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Cards
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            cards: card_row(rows[0]),
            table: rows[1],
        }
    }
}

/// Split an area into a row of three equal cards
fn card_row(area: Rect) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);
    [cols[0], cols[1], cols[2]]
}

/// Create a centered rect for dialogs, sized as percentages of the frame
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// The top-right area used for toast notifications
pub fn notification_rect(r: Rect) -> Rect {
    let width = 36.min(r.width);
    Rect::new(r.x + r.width - width, r.y, width, 3.min(r.height))
}
