//! Dashboard view
//!
//! Summary cards, per-category budget progress, recent expenses, and
//! over-budget alerts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::engine::aggregate;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);

    let summary = aggregate::summarize(app.store.expenses(), app.store.budgets());

    render_card(
        frame,
        layout.cards[0],
        "Total Spent",
        format!("{}", summary.total_spent),
        Color::Cyan,
    );
    render_card(
        frame,
        layout.cards[1],
        "Remaining Budget",
        format!("{}", summary.remaining),
        if summary.remaining.is_negative() {
            Color::Red
        } else {
            Color::Green
        },
    );
    render_card(
        frame,
        layout.cards[2],
        "Budget Used",
        format!("{:.1}%", summary.percent_spent),
        Color::Magenta,
    );

    render_progress(frame, app, layout.progress);
    render_recent(frame, app, layout.recent);
    render_alerts(frame, app, layout.alerts);
}

/// Render a single summary card
fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Render the per-category budget progress bars
fn render_progress(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget Overview ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summaries = aggregate::category_summaries(app.store.expenses(), app.store.budgets());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); summaries.len()])
        .split(inner);

    for (summary, row) in summaries.iter().zip(rows.iter()) {
        let over = summary.is_over_budget();
        let color = if over { Color::Red } else { Color::Blue };

        // Bars fill at most to 100% even when over budget
        let ratio = (summary.percent_used / 100.0).clamp(0.0, 1.0);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .ratio(ratio)
            .label(format!(
                "{:<15} {} / {}",
                summary.category.as_str(),
                summary.spent,
                summary.cap
            ));

        frame.render_widget(gauge, *row);
    }
}

/// Render the recent-expenses panel (last five by date)
fn render_recent(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let recent = aggregate::recent(app.store.expenses(), 5);

    if recent.is_empty() {
        let text = Paragraph::new("No recent transactions")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let lines: Vec<Line> = recent
        .iter()
        .map(|e| {
            Line::from(vec![
                Span::styled(
                    format!("{:<20}", truncate(&e.description, 20)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{}  {:<14}", e.date.format("%Y-%m-%d"), e.category.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>10}", e.amount.to_string()),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the over-budget alerts panel
fn render_alerts(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Alerts ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let over = aggregate::over_budget_categories(app.store.expenses(), app.store.budgets());

    if over.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "You're on track!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "All your spending is within budget limits.",
                Style::default().fg(Color::Green),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let mut lines = Vec::new();
    for category in over {
        let summary = aggregate::category_summary(app.store.expenses(), app.store.budgets(), category);
        lines.push(Line::from(Span::styled(
            format!("⚠ Budget Exceeded: {}", category),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  You've spent {} of your {} budget.",
                summary.spent, summary.cap
            ),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
