//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Habit record (matches backend JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Resets daily on the server side
    #[serde(rename = "isFinished")]
    pub is_finished: bool,
    /// Consecutive completions, incremented server-side by the finish endpoint
    #[serde(default)]
    pub streak: u32,
}
