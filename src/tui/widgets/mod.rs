//! Reusable TUI widgets

pub mod input;
pub mod notification;
