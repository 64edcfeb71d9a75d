//! List commands (show, status, find, demo)

use std::rc::Rc;

use anyhow::Result;

use super::output::Output;
use crate::domain::{Todo, TodoList};

/// Which todos `show` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Selection {
    #[default]
    All,
    Done,
    NotDone,
}

impl Selection {
    /// Returns the derived view of `list` for this selection
    pub fn apply(self, list: &TodoList) -> TodoList {
        match self {
            Selection::All => list.clone(),
            Selection::Done => list.all_done(),
            Selection::NotDone => list.all_not_done(),
        }
    }
}

/// Render a list, or one of its derived views
pub fn show(output: &Output, list: &TodoList, only: Selection) -> Result<()> {
    let view = only.apply(list);
    output.verbose_ctx(
        "show",
        &format!("Showing {} of {} todos ({:?})", view.size(), list.size(), only),
    );

    if output.is_json() {
        output.data(&view);
    } else {
        output.text(&view);
    }

    Ok(())
}

/// Show completion counts for a list
pub fn status(output: &Output, list: &TodoList) -> Result<()> {
    let done = list.done_count();
    let not_done = list.not_done_count();

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": list.title(),
            "size": list.size(),
            "done": done,
            "not_done": not_done,
            "is_done": list.is_done(),
        }));
    } else {
        output.text(list.title());
        output.text(format!("  Total:    {}", list.size()));
        output.text(format!("  Done:     {}", done));
        output.text(format!("  Not done: {}", not_done));
        output.text(format!(
            "  Complete: {}",
            if list.is_done() { "yes" } else { "no" }
        ));
    }

    Ok(())
}

/// Find the first todo with an exact title
///
/// A missing todo is reported, not treated as an error.
pub fn find(output: &Output, list: &TodoList, title: &str) -> Result<()> {
    let found = list.find_by_title(title);
    output.verbose_ctx("find", &format!("Searched {} todos for '{}'", list.size(), title));

    if output.is_json() {
        output.data(&serde_json::json!({
            "found": found.is_some(),
            "todo": found,
        }));
    } else {
        match found {
            Some(todo) => output.text(&todo),
            None => output.text(format!("No todo titled '{}'", title)),
        }
    }

    Ok(())
}

/// Builds the example list used by `demo`
pub fn demo_list() -> TodoList {
    let mut list = TodoList::new("Today's Todos");
    let milk = Rc::new(Todo::new("Buy milk"));
    milk.mark_done();

    list.add(milk);
    list.add(Todo::new("Clean room"));
    list.add(Todo::new("Go to the gym"));
    list
}

/// Render the example list
pub fn demo(output: &Output) -> Result<()> {
    show(output, &demo_list(), Selection::All)
}
