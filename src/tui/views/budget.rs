//! Budget view
//!
//! Summary cards and the per-category cap table. Over-budget rows are
//! highlighted; Enter opens the cap edit dialog for the selected row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::engine::aggregate;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::BudgetLayout;

/// Render the budget view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = BudgetLayout::new(area);

    let summary = aggregate::summarize(app.store.expenses(), app.store.budgets());

    render_card(
        frame,
        layout.cards[0],
        "Total Budget",
        format!("{}", summary.total_budget),
        Color::Cyan,
    );
    render_card(
        frame,
        layout.cards[1],
        "Total Expenses",
        format!("{}", summary.total_spent),
        Color::Yellow,
    );
    render_card(
        frame,
        layout.cards[2],
        "Remaining",
        format!("{}", summary.remaining),
        if summary.remaining.is_negative() {
            Color::Red
        } else {
            Color::Green
        },
    );

    render_category_table(frame, app, layout.table);
}

/// Render a single summary card
fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(ratatui::text::Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Render the per-category cap table
fn render_category_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Enter: edit cap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let summaries = aggregate::category_summaries(app.store.expenses(), app.store.budgets());

    let widths = [
        ratatui::layout::Constraint::Min(16),    // Category
        ratatui::layout::Constraint::Length(14), // Cap
        ratatui::layout::Constraint::Length(14), // Spent
        ratatui::layout::Constraint::Length(14), // Remaining
    ];

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Budget").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Spent").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Remaining").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = summaries
        .iter()
        .map(|s| {
            let over = s.is_over_budget();

            let remaining_style = if over {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            let row = Row::new(vec![
                Cell::from(s.category.as_str()),
                Cell::from(format!("{}", s.cap)),
                Cell::from(format!("{}", s.spent)),
                Cell::from(format!("{}", s.remaining)).style(remaining_style),
            ]);

            if over {
                row.style(Style::default().fg(Color::Red))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(table, area, &mut state);
}
