//! Help dialog
//!
//! Shows contextual help for the active screen plus a short FAQ.
//! Any key closes it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(64, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help & Support ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current screen
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![section(app.active_view.title()), Line::from("")];

    match app.active_view {
        ActiveView::Dashboard => {
            lines.push(Line::from(
                "The dashboard provides an overview of your financial situation:",
            ));
            lines.push(Line::from(""));
            lines.push(bullet("View your total spending and remaining budget"));
            lines.push(bullet("See a breakdown of spending by category"));
            lines.push(bullet("Check which categories are over budget"));
            lines.push(bullet("View your most recent transactions"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "The color-coded progress bars show how much of each budget category you've used.",
            ));
        }
        ActiveView::Expenses => {
            lines.push(Line::from(
                "The expenses screen lets you view and manage your transaction history:",
            ));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Search for specific expenses"));
            lines.push(key_line("c", "Filter expenses by category"));
            lines.push(key_line("s", "Sort by date, amount, or description"));
            lines.push(key_line("r", "Reverse the sort direction"));
            lines.push(key_line("x", "Clear all filters"));
            lines.push(key_line("d", "Delete the selected expense"));
            lines.push(key_line("j/k", "Move the selection"));
        }
        ActiveView::AddExpense => {
            lines.push(Line::from("To add a new expense:"));
            lines.push(Line::from(""));
            lines.push(bullet("Enter a clear description of what you purchased"));
            lines.push(bullet("Enter the amount spent"));
            lines.push(bullet("Select the appropriate category with ←/→"));
            lines.push(bullet("Choose the date of the transaction"));
            lines.push(bullet("Press Enter to save"));
        }
        ActiveView::Budget => {
            lines.push(Line::from(
                "The budget screen allows you to set and adjust spending limits:",
            ));
            lines.push(Line::from(""));
            lines.push(bullet("View your current budget allocations by category"));
            lines.push(bullet("See how much you've spent in each category"));
            lines.push(key_line("Enter", "Edit the selected category's cap"));
            lines.push(bullet("Categories highlighted in red are over budget"));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Frequently Asked Questions"));
    lines.push(Line::from(""));
    lines.push(faq(
        "How do I delete an expense?",
        "Go to the Expenses screen and press 'd' on the expense you want to delete.",
    ));
    lines.push(faq(
        "Can I edit an expense after adding it?",
        "No - delete the incorrect expense and add a new one.",
    ));
    lines.push(faq(
        "How do I change my budget?",
        "Go to the Budget screen and press Enter on the category you want to change.",
    ));
    lines.push(faq(
        "What does \"over budget\" mean?",
        "You've spent more in a category than the cap you set. These are highlighted in red.",
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a section header line
fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a bullet line
fn bullet(text: &str) -> Line<'static> {
    Line::from(format!("  • {}", text))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>7}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Create a question/answer pair as a single line pair
fn faq(question: &str, answer: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", question),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(answer.to_string(), Style::default().fg(Color::Gray)),
    ])
}
