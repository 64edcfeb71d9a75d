//! Todo domain model
//!
//! A todo is a titled unit of work with a done flag. The title is fixed at
//! construction; only the mark operations touch the flag.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// A single todo item
///
/// The done flag lives in a [`Cell`] so that a todo shared through `Rc<Todo>`
/// by several lists can be marked through any of them and every holder sees
/// the new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Human-readable title
    title: String,

    /// Completion flag
    #[serde(default)]
    done: Cell<bool>,
}

impl Todo {
    /// Marker rendered for a completed todo (U+2713 CHECK MARK)
    pub const DONE_MARKER: char = '\u{2713}';

    /// Marker rendered for an open todo
    pub const UNDONE_MARKER: char = ' ';

    /// Creates a new, not yet done todo
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    /// Returns the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns true if the todo has been marked done
    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    /// Marks the todo done
    pub fn mark_done(&self) {
        self.done.set(true);
    }

    /// Marks the todo not done
    pub fn mark_undone(&self) {
        self.done.set(false);
    }

    /// Returns the marker for the current state
    pub fn marker(&self) -> char {
        if self.is_done() {
            Self::DONE_MARKER
        } else {
            Self::UNDONE_MARKER
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
