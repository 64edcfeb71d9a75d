//! Building a list from command-line arguments
//!
//! Nothing is persisted: each invocation assembles a fresh list from its
//! arguments, then applies the marks and removals in a fixed order
//! (`--done`, `--done-title`, `--all-done`, `--remove`).

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use crate::domain::{Todo, TodoList};

/// Arguments shared by every command that works on a list
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// List title (defaults to the configured title)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Todo titles, added in order
    #[arg(value_name = "TODO")]
    pub todos: Vec<String>,

    /// Mark the todo at this position done (repeatable)
    #[arg(long = "done", value_name = "INDEX")]
    pub done: Vec<usize>,

    /// Mark the first todo with this title done (repeatable)
    #[arg(long = "done-title", value_name = "TITLE")]
    pub done_titles: Vec<String>,

    /// Mark every todo done
    #[arg(long)]
    pub all_done: bool,

    /// Remove the todo at this position (repeatable, applied in order)
    #[arg(long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,
}

impl ListArgs {
    /// Builds the list described by these arguments
    pub fn build(&self, default_title: &str, output: &Output) -> Result<TodoList> {
        let title = self.title.as_deref().unwrap_or(default_title);
        let mut list = TodoList::new(title);

        for todo in &self.todos {
            list.add(Todo::new(todo.as_str()));
        }
        output.verbose_ctx("list", &format!("Added {} todos to '{}'", list.size(), title));

        for &index in &self.done {
            list.mark_done_at(index)
                .with_context(|| format!("Cannot mark todo {} done", index))?;
        }

        for todo_title in &self.done_titles {
            if list.find_by_title(todo_title).is_none() {
                output.verbose_ctx(
                    "list",
                    &format!("No todo titled '{}', nothing marked", todo_title),
                );
            }
            list.mark_done(todo_title);
        }

        if self.all_done {
            list.mark_all_done();
        }

        for &index in &self.remove {
            let removed = list
                .remove_at(index)
                .with_context(|| format!("Cannot remove todo {}", index))?;
            for todo in removed {
                output.verbose_ctx("list", &format!("Removed '{}'", todo.title()));
            }
        }

        Ok(list)
    }
}
