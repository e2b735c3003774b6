//! To-do list domain: task records and their store.

mod models;
mod store;

pub use models::Task;
pub use store::{TaskStore, DEFAULT_TASKS_FILE};
