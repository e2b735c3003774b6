//! Menu loop for the to-do list application.

use crate::cli::{prompt, prompt_index};
use crate::error::Result;
use crate::tasks::TaskStore;
use std::io::{BufRead, Write};

/// Run the to-do list menu loop until the user selects Exit.
///
/// # Errors
///
/// Returns an error on I/O failure or when a prompt that expects a number
/// receives non-numeric input.
pub fn run<R: BufRead, W: Write>(store: &mut TaskStore, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "To-Do List Application")?;
        writeln!(out, "1. Add Task")?;
        writeln!(out, "2. Remove Task")?;
        writeln!(out, "3. Mark Task as Completed")?;
        writeln!(out, "4. List Tasks")?;
        writeln!(out, "5. Exit")?;

        let choice = prompt(input, out, "Choose an option: ")?;
        match choice.as_str() {
            "1" => {
                let title = prompt(input, out, "Task Title: ")?;
                let priority = prompt(input, out, "Priority (high, medium, low): ")?;
                let due_date = prompt(input, out, "Due Date (YYYY-MM-DD) or leave blank: ")?;
                let due_date = if due_date.is_empty() { None } else { Some(due_date) };
                store.add(&title, &priority, due_date)?;
            }
            "2" => {
                list_tasks(store, out)?;
                let index = prompt_index(input, out, "Task number to remove: ")?;
                let removed = match index {
                    Some(i) => store.remove(i)?,
                    None => None,
                };
                if removed.is_none() {
                    writeln!(out, "No task with that number.")?;
                }
            }
            "3" => {
                list_tasks(store, out)?;
                let index = prompt_index(input, out, "Task number to mark as completed: ")?;
                let marked = match index {
                    Some(i) => store.mark_completed(i)?,
                    None => false,
                };
                if !marked {
                    writeln!(out, "No task with that number.")?;
                }
            }
            "4" => list_tasks(store, out)?,
            "5" => break,
            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }

    Ok(())
}

fn list_tasks(store: &TaskStore, out: &mut impl Write) -> Result<()> {
    for line in store.display_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
