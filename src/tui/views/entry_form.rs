//! Add-expense form screen
//!
//! Form with description, amount, category selector, and date. Validation
//! failures are reported inline next to the offending field and block the
//! mutation; a successful add resets the form and shows a success banner.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, ExpenseDraft, Money};
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Description,
    Amount,
    Category,
    Date,
}

impl EntryField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Per-field validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
}

impl FieldErrors {
    /// Whether any field failed validation
    pub fn any(&self) -> bool {
        self.description.is_some() || self.amount.is_some() || self.date.is_some()
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused field
    pub focused_field: EntryField,

    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input (YYYY-MM-DD)
    pub date_input: TextInput,

    /// Selected category
    pub category: Category,

    /// Validation errors from the last submit attempt
    pub errors: FieldErrors,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a new form state with default values (today's date)
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: EntryField::Description,
            description_input: TextInput::new().placeholder("What did you spend on?"),
            amount_input: TextInput::new().placeholder("0.00"),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category: Category::ALL[0],
            errors: FieldErrors::default(),
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input backing the focused field, if it has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Description => Some(&mut self.description_input),
            EntryField::Amount => Some(&mut self.amount_input),
            EntryField::Date => Some(&mut self.date_input),
            EntryField::Category => None,
        }
    }

    /// Validate the form, recording per-field errors
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.description_input.value().trim().is_empty() {
            errors.description = Some("Description is required".to_string());
        }

        match Money::parse(self.amount_input.value()) {
            Ok(amount) if amount.is_positive() => {}
            _ => errors.amount = Some("Please enter a valid amount".to_string()),
        }

        let date_str = self.date_input.value().trim();
        if date_str.is_empty() {
            errors.date = Some("Date is required".to_string());
        } else if NaiveDate::parse_from_str(date_str, "%Y-%m-%d").is_err() {
            errors.date = Some("Enter a valid date (YYYY-MM-DD)".to_string());
        }

        errors
    }

    /// Validate and build a draft; on failure the errors are stored for
    /// inline display and `None` is returned.
    pub fn submit(&mut self) -> Option<ExpenseDraft> {
        let errors = self.validate();
        if errors.any() {
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::default();

        // Validated above; these cannot fail
        let amount = Money::parse(self.amount_input.value()).ok()?;
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d").ok()?;

        Some(ExpenseDraft::new(
            self.description_input.value().trim(),
            amount,
            self.category,
            date,
        ))
    }
}

/// Render the add-expense screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.entry_form;

    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Cyan } else { Color::DarkGray }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Date error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Length(1), // Spacer
            Constraint::Min(5),    // Tips
        ])
        .split(inner);

    let focused = |field: EntryField| editing && form.focused_field == field;

    frame.render_widget(
        Paragraph::new(form.description_input.labeled_line("Description", focused(EntryField::Description))),
        chunks[1],
    );
    render_error(frame, chunks[2], form.errors.description.as_deref());

    frame.render_widget(
        Paragraph::new(form.amount_input.labeled_line("Amount", focused(EntryField::Amount))),
        chunks[3],
    );
    render_error(frame, chunks[4], form.errors.amount.as_deref());

    render_category_selector(frame, chunks[5], form.category, focused(EntryField::Category));

    frame.render_widget(
        Paragraph::new(form.date_input.labeled_line("Date", focused(EntryField::Date))),
        chunks[6],
    );
    render_error(frame, chunks[7], form.errors.date.as_deref());

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Done"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[9]);

    render_tips(frame, chunks[11]);
}

/// Render an inline validation error next to its field
fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(vec![
            Span::raw("              "),
            Span::styled(format!("! {}", message), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the category selector field
fn render_category_selector(frame: &mut Frame, area: Rect, category: Category, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let arrows_style = Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray });

    let line = Line::from(vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled("◀ ", arrows_style),
        Span::styled(format!("{:^14}", category.as_str()), value_style),
        Span::styled(" ▶", arrows_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tips box shown under the form
fn render_tips(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Tips ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let tips = vec![
        Line::from("• Be specific with descriptions to better track your spending"),
        Line::from("• Categorize expenses correctly to get accurate budget insights"),
        Line::from("• Add expenses as soon as possible to maintain accurate records"),
    ];

    let paragraph = Paragraph::new(tips)
        .block(block)
        .style(Style::default().fg(Color::Blue));

    frame.render_widget(paragraph, area);
}

/// Handle key input for the entry form.
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.entry_form.prev_field();
            } else {
                app.entry_form.next_field();
            }
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.entry_form.prev_field();
            true
        }

        KeyCode::Enter => {
            submit(app);
            true
        }

        KeyCode::Left if app.entry_form.focused_field == EntryField::Category => {
            app.entry_form.category = app.entry_form.category.prev();
            true
        }

        KeyCode::Right if app.entry_form.focused_field == EntryField::Category => {
            app.entry_form.category = app.entry_form.category.next();
            true
        }

        KeyCode::Backspace => {
            if let Some(input) = app.entry_form.focused_input() {
                input.backspace();
            }
            true
        }

        KeyCode::Left => {
            if let Some(input) = app.entry_form.focused_input() {
                input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if let Some(input) = app.entry_form.focused_input() {
                input.move_right();
            }
            true
        }

        KeyCode::Home => {
            if let Some(input) = app.entry_form.focused_input() {
                input.move_start();
            }
            true
        }

        KeyCode::End => {
            if let Some(input) = app.entry_form.focused_input() {
                input.move_end();
            }
            true
        }

        KeyCode::Char(c) => {
            if let Some(input) = app.entry_form.focused_input() {
                input.insert(c);
            }
            true
        }

        _ => false,
    }
}

/// Validate and add the expense, resetting the form on success
fn submit(app: &mut App) {
    if let Some(draft) = app.entry_form.submit() {
        app.store.add_expense(draft);
        app.entry_form = EntryFormState::new();
        app.notify_success("Expense added successfully!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EntryFormState {
        let mut form = EntryFormState::new();
        form.description_input = TextInput::new().content("Groceries");
        form.amount_input = TextInput::new().content("120");
        form.date_input = TextInput::new().content("2025-04-01");
        form
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let mut form = filled_form();
        let draft = form.submit().expect("valid form");

        assert_eq!(draft.description, "Groceries");
        assert_eq!(draft.amount, Money::from_dollars(120));
        assert_eq!(draft.category, Category::Food);
        assert!(!form.errors.any());
    }

    #[test]
    fn test_draft_uses_selected_category() {
        let mut form = filled_form();
        form.category = Category::Entertainment;
        let draft = form.submit().expect("valid form");
        assert_eq!(draft.category, Category::Entertainment);
    }

    #[test]
    fn test_empty_description_blocks_submit() {
        let mut form = filled_form();
        form.description_input = TextInput::new().content("   ");

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.description.as_deref(),
            Some("Description is required")
        );
        assert!(form.errors.amount.is_none());
    }

    #[test]
    fn test_non_numeric_amount_blocks_submit() {
        let mut form = filled_form();
        form.amount_input = TextInput::new().content("abc");

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.amount.as_deref(),
            Some("Please enter a valid amount")
        );
    }

    #[test]
    fn test_non_positive_amount_blocks_submit() {
        for bad in ["0", "-5", "0.00"] {
            let mut form = filled_form();
            form.amount_input = TextInput::new().content(bad);
            assert!(form.submit().is_none(), "amount {:?} accepted", bad);
            assert!(form.errors.amount.is_some());
        }
    }

    #[test]
    fn test_missing_date_blocks_submit() {
        let mut form = filled_form();
        form.date_input = TextInput::new();

        assert!(form.submit().is_none());
        assert_eq!(form.errors.date.as_deref(), Some("Date is required"));
    }

    #[test]
    fn test_invalid_date_blocks_submit() {
        let mut form = filled_form();
        form.date_input = TextInput::new().content("04/01/2025");

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.date.as_deref(),
            Some("Enter a valid date (YYYY-MM-DD)")
        );
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let mut form = EntryFormState::new();
        form.date_input.clear();

        assert!(form.submit().is_none());
        assert!(form.errors.description.is_some());
        assert!(form.errors.amount.is_some());
        assert!(form.errors.date.is_some());
    }

    #[test]
    fn test_field_cycle() {
        let mut field = EntryField::Description;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, EntryField::Description);
        assert_eq!(EntryField::Description.prev(), EntryField::Date);
    }

    #[test]
    fn test_defaults_to_today_and_first_category() {
        let form = EntryFormState::new();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(form.date_input.value(), today);
        assert_eq!(form.category, Category::Food);
    }
}
