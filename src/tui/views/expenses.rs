//! Expense history view
//!
//! Filter bar (search, category, sort), result summary, and the expense
//! table. The table always shows the derived view produced by the
//! current query.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::engine::aggregate;
use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::layout::ExpensesLayout;

/// Render the expense history screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ExpensesLayout::new(area);

    render_filter_bar(frame, app, layout.filters);
    render_summary_line(frame, app, layout.summary);
    render_table(frame, app, layout.table);
}

/// Render the search/category/sort filter bar
fn render_filter_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let searching = app.input_mode == InputMode::Editing;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    // Search box
    let search_block = Block::default()
        .title(" Search [/] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if searching { Color::Cyan } else { Color::DarkGray }));
    let search_line = Line::from(app.search_input.spans(searching));
    frame.render_widget(Paragraph::new(search_line).block(search_block), cols[0]);

    // Category filter
    let category_block = Block::default()
        .title(" Category [c] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let category_text = match app.query.category {
        Some(c) => Span::styled(c.as_str(), Style::default().fg(Color::Yellow)),
        None => Span::styled("All Categories", Style::default().fg(Color::White)),
    };
    frame.render_widget(Paragraph::new(category_text).block(category_block), cols[1]);

    // Sort selector
    let sort_block = Block::default()
        .title(" Sort [s/r] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let sort_text = Span::styled(
        format!("{} {}", app.query.sort_key, app.query.direction.indicator()),
        Style::default().fg(Color::White),
    );
    frame.render_widget(Paragraph::new(sort_text).block(sort_block), cols[2]);
}

/// Render the "Showing N expenses ... Total: $X" line
fn render_summary_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let filtered = app.filtered_expenses();
    let total = aggregate::total_all(&filtered);

    let noun = if filtered.len() == 1 { "expense" } else { "expenses" };
    let mut showing = format!(" Showing {} {}", filtered.len(), noun);
    if let Some(category) = app.query.category {
        showing.push_str(&format!(" in {}", category));
    }

    let total_text = format!("Total: {} ", total);
    let padding_len = (area.width as usize)
        .saturating_sub(showing.chars().count())
        .saturating_sub(total_text.chars().count());

    let line = Line::from(vec![
        Span::styled(showing, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding_len.max(1))),
        Span::styled(
            total_text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the expense table
fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses = app.filtered_expenses();

    if expenses.is_empty() {
        let message = if app.query.is_filtered() {
            "No expenses found matching your filters. Press 'x' to clear filters."
        } else {
            "No expenses yet. Switch to Add Expense [3] to log one."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(20),    // Description
        Constraint::Length(12), // Amount
        Constraint::Length(16), // Category
        Constraint::Length(12), // Date
    ];

    let header = Row::new(vec![
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.description.clone()),
                Cell::from(format!("{}", e.amount)).style(Style::default().fg(Color::Yellow)),
                Cell::from(e.category.as_str()).style(Style::default().fg(Color::Cyan)),
                Cell::from(e.date.format("%Y-%m-%d").to_string())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
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
    state.select(Some(app.selected_expense_index.min(expenses.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
