//! Onboarding tour dialog
//!
//! A fixed four-step walkthrough shown automatically on the first visit
//! and on demand afterwards. Steps are navigated with Next/Previous; the
//! final step offers "Get Started".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Number of steps in the tour
pub const TOTAL_STEPS: usize = 4;

/// State for the tour dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct TourState {
    /// Current step (0-based)
    pub step: usize,
}

impl TourState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first step
    pub fn restart(&mut self) {
        self.step = 0;
    }

    /// Advance one step, saturating at the last
    pub fn next(&mut self) {
        if self.step + 1 < TOTAL_STEPS {
            self.step += 1;
        }
    }

    /// Go back one step, saturating at the first
    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Whether the current step is the final one
    pub fn is_last(&self) -> bool {
        self.step + 1 == TOTAL_STEPS
    }

    /// Title and body text for the current step
    pub fn content(&self) -> (&'static str, &'static str) {
        match self.step {
            0 => (
                "Welcome to BudgetTracker!",
                "This quick tour will help you get familiar with the key features \
                 of the application. Let's get started!",
            ),
            1 => (
                "Dashboard Overview",
                "The dashboard gives you a complete overview of your finances. You \
                 can see your total spending, remaining budget, and which categories \
                 need attention.",
            ),
            2 => (
                "Adding Expenses",
                "Easily add new expenses by filling out the form. Make sure to \
                 categorize them correctly to get accurate budget insights.",
            ),
            _ => (
                "Managing Your Budget",
                "Set and adjust your budget limits for different categories. The \
                 system will alert you when you're approaching or exceeding your \
                 limits.",
            ),
        }
    }
}

/// Render the tour dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(54, 11, frame.area());

    frame.render_widget(Clear, area);

    let (title, body) = app.tour.content();

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from(""), Line::from(body), Line::from("")];

    // Step dots
    let dots: Vec<Span> = (0..TOTAL_STEPS)
        .map(|i| {
            if i == app.tour.step {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    lines.push(Line::from(dots));
    lines.push(Line::from(""));

    let mut hints = Vec::new();
    if app.tour.step > 0 {
        hints.push(Span::styled("[←]", Style::default().fg(Color::Yellow)));
        hints.push(Span::raw(" Previous  "));
    }
    if app.tour.is_last() {
        hints.push(Span::styled("[Enter]", Style::default().fg(Color::Green)));
        hints.push(Span::raw(" Get Started  "));
    } else {
        hints.push(Span::styled("[→]", Style::default().fg(Color::Yellow)));
        hints.push(Span::raw(" Next  "));
    }
    hints.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
    hints.push(Span::raw(" Close"));
    lines.push(Line::from(hints));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Handle key input for the tour dialog.
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => {
            app.close_dialog();
            true
        }

        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            app.tour.next();
            true
        }

        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            app.tour.prev();
            true
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.tour.is_last() {
                app.close_dialog();
            } else {
                app.tour.next();
            }
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation_saturates() {
        let mut tour = TourState::new();
        tour.prev();
        assert_eq!(tour.step, 0);

        for _ in 0..10 {
            tour.next();
        }
        assert_eq!(tour.step, TOTAL_STEPS - 1);
        assert!(tour.is_last());
    }

    #[test]
    fn test_restart() {
        let mut tour = TourState::new();
        tour.next();
        tour.next();
        tour.restart();
        assert_eq!(tour.step, 0);
        assert!(!tour.is_last());
    }

    #[test]
    fn test_every_step_has_content() {
        let mut tour = TourState::new();
        for _ in 0..TOTAL_STEPS {
            let (title, body) = tour.content();
            assert!(!title.is_empty());
            assert!(!body.is_empty());
            tour.next();
        }
    }
}
