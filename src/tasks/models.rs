//! Task model for the to-do list.

use serde::{Deserialize, Serialize};

/// Default priority assigned when none is given.
pub(crate) const DEFAULT_PRIORITY: &str = "medium";

/// A to-do item.
///
/// Priority is a free string (high/medium/low by convention) and is stored
/// as entered. Tasks carry no identity field; their position in the store's
/// sequence addresses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short title describing the task.
    pub title: String,
    /// Priority label (high/medium/low by convention, unvalidated).
    pub priority: String,
    /// Due date as `YYYY-MM-DD`, if any.
    pub due_date: Option<String>,
    /// Whether the task has been completed.
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    #[must_use]
    pub fn new(title: &str, priority: &str, due_date: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            priority: priority.to_string(),
            due_date,
            completed: false,
        }
    }

    /// Render the task as a numbered display line.
    ///
    /// `index` is the zero-based store position; the line shows it 1-based.
    #[must_use]
    pub fn display_line(&self, index: usize) -> String {
        let status = if self.completed { "Completed" } else { "Pending" };
        let due = self.due_date.as_deref().unwrap_or("No due date");
        format!(
            "{}. [{status}] {} (Priority: {}, Due: {due})",
            index + 1,
            self.title,
            self.priority
        )
    }
}
