//! Reusable components.

pub mod groups;
pub mod ui;
