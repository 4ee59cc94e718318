//! Toast notification widget
//!
//! Displays temporary banners (e.g. "Expense added successfully!") that
//! dismiss themselves after a fixed interval. Expiry is driven by the
//! event loop's tick; the banner is cosmetic and never affects the data
//! model.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::time::{Duration, Instant};

/// How long a banner stays on screen
pub const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    /// Border/title color for this kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Info => Color::Blue,
        }
    }

    /// Title for this kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Info => "Info",
        }
    }
}

/// A transient banner message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Create a success banner
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            created_at: Instant::now(),
            duration: BANNER_DURATION,
        }
    }

    /// Create an info banner
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
            created_at: Instant::now(),
            duration: BANNER_DURATION,
        }
    }

    /// Whether the banner's display interval has elapsed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification banner
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(block);

        paragraph.render(area, buf);
    }
}

/// The set of currently visible banners
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a banner
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop banners whose interval has elapsed (called on tick)
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The banner currently shown (oldest first)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_banner() {
        let n = Notification::success("Expense added successfully!");
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("first"));
        queue.push(Notification::info("second"));

        assert_eq!(queue.current().unwrap().message, "first");
    }

    #[test]
    fn test_remove_expired_keeps_fresh() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("fresh"));
        queue.remove_expired();
        assert!(!queue.is_empty());
    }
}
