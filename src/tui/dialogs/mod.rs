//! Modal dialogs: help, onboarding tour, budget cap editing

pub mod edit_budget;
pub mod help;
pub mod tour;
