//! JSON-backed task store.

use crate::error::Result;
use crate::store::JsonStore;
use crate::tasks::models::{Task, DEFAULT_PRIORITY};
use std::path::Path;

/// Default backing file for the to-do list.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// The to-do list, persisted to a JSON array file after every mutation.
#[derive(Debug)]
pub struct TaskStore {
    store: JsonStore<Task>,
}

impl TaskStore {
    /// Open a task store backed by the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self { store: JsonStore::open(path)? })
    }

    /// Add a task to the end of the list and persist.
    ///
    /// An empty priority falls back to `"medium"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn add(&mut self, title: &str, priority: &str, due_date: Option<String>) -> Result<()> {
        let priority = if priority.is_empty() { DEFAULT_PRIORITY } else { priority };
        self.store.push(Task::new(title, priority, due_date))
    }

    /// Remove the task at the given zero-based index and persist.
    ///
    /// Returns the removed task, or `None` when the index is out of range
    /// (the list and the file are left unchanged).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn remove(&mut self, index: usize) -> Result<Option<Task>> {
        self.store.remove(index)
    }

    /// Mark the task at the given zero-based index as completed and persist.
    ///
    /// Returns `false` when the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn mark_completed(&mut self, index: usize) -> Result<bool> {
        self.store.update(index, |task| task.completed = true)
    }

    /// Read-only ordered view of the tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.records()
    }

    /// Render every task as a numbered display line, in stored order.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.tasks().iter().enumerate().map(|(i, task)| task.display_line(i)).collect()
    }
}
