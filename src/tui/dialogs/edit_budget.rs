//! Edit budget dialog
//!
//! Dialog to replace the spending cap for a category. Rejects empty,
//! non-numeric, and non-positive amounts with an inline error; the
//! mapping is left unchanged on rejection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// State for the edit budget dialog
#[derive(Debug, Clone, Default)]
pub struct EditBudgetState {
    /// The category being edited
    pub category: Option<Category>,
    /// Current cap, shown for reference
    pub current_cap: Money,
    /// Input value (as string for editing)
    pub amount_input: String,
    /// Cursor position in the input
    pub cursor_pos: usize,
    /// Error message
    pub error_message: Option<String>,
}

impl EditBudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the dialog for a category
    pub fn init(&mut self, category: Category, current_cap: Money) {
        self.category = Some(category);
        self.current_cap = current_cap;
        // Pre-fill with the current cap (without $ sign)
        if current_cap.is_zero() {
            self.amount_input = String::new();
        } else {
            self.amount_input = format!("{:.2}", current_cap.cents() as f64 / 100.0);
        }
        self.cursor_pos = self.amount_input.len();
        self.error_message = None;
    }

    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Insert character at cursor (digits and decimal point only)
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.amount_input.insert(self.cursor_pos, c);
            self.cursor_pos += 1;
            self.error_message = None;
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            self.amount_input.remove(self.cursor_pos);
            self.error_message = None;
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor_pos < self.amount_input.len() {
            self.cursor_pos += 1;
        }
    }

    /// Clear the input
    pub fn clear_input(&mut self) {
        self.amount_input.clear();
        self.cursor_pos = 0;
        self.error_message = None;
    }

    /// Parse and validate the entered cap.
    ///
    /// The new cap must be a positive amount; anything else is rejected
    /// and the budget mapping stays untouched.
    pub fn parse_amount(&self) -> Result<Money, String> {
        let amount = Money::parse(self.amount_input.trim())
            .map_err(|_| "Please enter a valid amount".to_string())?;

        if !amount.is_positive() {
            return Err("Please enter a valid amount".to_string());
        }

        Ok(amount)
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the edit budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(46, 11, frame.area());

    frame.render_widget(Clear, area);

    let state = &app.edit_budget;

    let block = Block::default()
        .title(" Edit Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category name
            Constraint::Length(1), // Current cap
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // New amount input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let category_name = state.category.map(|c| c.as_str()).unwrap_or("-");
    let category_line = Line::from(vec![
        Span::styled("Category: ", Style::default().fg(Color::Yellow)),
        Span::styled(category_name, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[1]);

    let current_line = Line::from(vec![
        Span::styled("Current:  ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{}", state.current_cap),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[2]);

    // Input with cursor
    let mut input_spans = vec![
        Span::styled("New cap:  ", Style::default().fg(Color::Cyan)),
        Span::raw("$"),
    ];
    let cursor = state.cursor_pos.min(state.amount_input.len());
    let (before, after) = state.amount_input.split_at(cursor);

    input_spans.push(Span::styled(
        before.to_string(),
        Style::default().fg(Color::White),
    ));

    let cursor_char = after.chars().next().unwrap_or(' ');
    input_spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    if after.len() > 1 {
        input_spans.push(Span::styled(
            after[1..].to_string(),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(input_spans)), chunks[4]);

    // Error message
    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            format!("! {}", error),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    // Instructions
    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[7]);
}

/// Handle key events for the edit budget dialog.
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.edit_budget.reset();
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            match app.edit_budget.parse_amount() {
                Ok(amount) => {
                    if let Some(category) = app.edit_budget.category {
                        app.store.set_budget(category, amount);
                        app.set_status(format!("Budget for {} set to {}", category, amount));
                    }
                    app.edit_budget.reset();
                    app.close_dialog();
                }
                Err(e) => {
                    app.edit_budget.set_error(e);
                }
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_budget.clear_input();
            true
        }

        KeyCode::Char(c) => {
            app.edit_budget.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.edit_budget.backspace();
            true
        }

        KeyCode::Left => {
            app.edit_budget.move_left();
            true
        }

        KeyCode::Right => {
            app.edit_budget.move_right();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(input: &str) -> EditBudgetState {
        let mut state = EditBudgetState::new();
        state.init(Category::Food, Money::from_dollars(300));
        state.amount_input = input.to_string();
        state.cursor_pos = state.amount_input.len();
        state
    }

    #[test]
    fn test_accepts_positive_amount() {
        assert_eq!(state_with("250").parse_amount().unwrap(), Money::from_dollars(250));
        assert_eq!(state_with("99.50").parse_amount().unwrap(), Money::from_cents(9950));
    }

    #[test]
    fn test_rejects_negative_amount() {
        // setBudget('Food', -5) must be rejected
        assert!(state_with("-5").parse_amount().is_err());
    }

    #[test]
    fn test_rejects_zero_and_empty_and_garbage() {
        assert!(state_with("0").parse_amount().is_err());
        assert!(state_with("").parse_amount().is_err());
        assert!(state_with("12..5").parse_amount().is_err());
    }

    #[test]
    fn test_insert_filters_non_numeric() {
        let mut state = EditBudgetState::new();
        state.init(Category::Other, Money::zero());

        for c in "1a2.b5".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount_input, "12.5");
    }

    #[test]
    fn test_init_prefills_current_cap() {
        let mut state = EditBudgetState::new();
        state.init(Category::Food, Money::from_dollars(300));
        assert_eq!(state.amount_input, "300.00");

        state.init(Category::Other, Money::zero());
        assert_eq!(state.amount_input, "");
    }
}
