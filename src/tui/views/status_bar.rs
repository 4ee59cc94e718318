//! Status bar view
//!
//! Shows overall totals, the transient status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::engine::aggregate;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = aggregate::summarize(app.store.expenses(), app.store.budgets());

    let mut spans = vec![];

    spans.push(Span::styled(" Spent: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", summary.total_spent),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));

    let remaining_color = if summary.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    spans.push(Span::styled("Remaining: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", summary.remaining),
        Style::default().fg(remaining_color).add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  1-4:Screens ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
