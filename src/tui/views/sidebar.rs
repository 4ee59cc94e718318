//! Sidebar view
//!
//! Shows the app title and the screen switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_nav(frame, app, layout.nav);
    render_footer(frame, layout.footer);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" BudgetTracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the screen switcher
fn render_nav(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Screens ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let screens = [
        ("1", "Dashboard", ActiveView::Dashboard),
        ("2", "Expenses", ActiveView::Expenses),
        ("3", "Add Expense", ActiveView::AddExpense),
        ("4", "Budget", ActiveView::Budget),
    ];

    let items: Vec<ListItem> = screens
        .iter()
        .map(|(key, name, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Render the help hint at the bottom of the sidebar
fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled("[?] ", Style::default().fg(Color::Yellow)),
            Span::styled("Help", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("[i] ", Style::default().fg(Color::Yellow)),
            Span::styled("Tour", Style::default().fg(Color::White)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
