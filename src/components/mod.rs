//! UI Components
//!
//! Leptos components for the two screens and their shared pieces.

mod dashboard;
mod finish_habit_item;
mod habit_row;
mod manage;
mod navbar;
mod snackbar;

pub use dashboard::Dashboard;
pub use finish_habit_item::FinishHabitItem;
pub use habit_row::HabitRow;
pub use manage::Manage;
pub use navbar::{Navbar, Screen};
pub use snackbar::Snackbar;
