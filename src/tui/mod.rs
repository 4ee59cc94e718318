//! Terminal User Interface module
//!
//! This module provides the ratatui interface: the four screens
//! (dashboard, expense history, entry form, budget editor), the help
//! and onboarding-tour dialogs, and the event plumbing around them.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
