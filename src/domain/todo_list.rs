//! Todo list domain model
//!
//! A list is a titled, insertion-ordered sequence of todos. Todos are held
//! through `Rc`, so derived views built by [`TodoList::filter`] share their
//! todos with the list they came from: marking a todo through a view marks
//! it in the original list as well.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use super::error::TodoListError;
use super::todo::Todo;

/// An ordered, titled group of todos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// List title, used in the rendered header
    title: String,

    /// Todos in insertion order
    #[serde(default)]
    todos: Vec<Rc<Todo>>,
}

impl TodoList {
    /// Creates an empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the list title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a todo to the end of the list
    ///
    /// Accepts an owned [`Todo`] or an `Rc<Todo>` already held elsewhere.
    pub fn add(&mut self, todo: impl Into<Rc<Todo>>) {
        self.todos.push(todo.into());
    }

    /// Returns the number of todos
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list holds no todos
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the first todo, if any
    pub fn first(&self) -> Option<&Rc<Todo>> {
        self.todos.first()
    }

    /// Returns the last todo, if any
    pub fn last(&self) -> Option<&Rc<Todo>> {
        self.todos.last()
    }

    /// Returns the todo at `index`
    pub fn item_at(&self, index: usize) -> Result<&Rc<Todo>, TodoListError> {
        self.todos.get(index).ok_or(TodoListError::InvalidIndex {
            index,
            size: self.todos.len(),
        })
    }

    /// Removes the todo at `index`, returning it as a one-element vector
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<Rc<Todo>>, TodoListError> {
        self.validate_index(index)?;
        Ok(self.todos.drain(index..=index).collect())
    }

    /// Removes and returns the last todo
    pub fn pop(&mut self) -> Option<Rc<Todo>> {
        self.todos.pop()
    }

    /// Removes and returns the first todo
    pub fn shift(&mut self) -> Option<Rc<Todo>> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Marks the todo at `index` done
    pub fn mark_done_at(&self, index: usize) -> Result<(), TodoListError> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the todo at `index` not done
    pub fn mark_undone_at(&self, index: usize) -> Result<(), TodoListError> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Returns true if every todo is done (an empty list is done)
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(|todo| todo.is_done())
    }

    /// Marks every todo done
    pub fn mark_all_done(&self) {
        self.for_each(|todo| todo.mark_done());
    }

    /// Marks every todo not done
    pub fn mark_all_undone(&self) {
        self.for_each(|todo| todo.mark_undone());
    }

    /// Calls `visit` once per todo, in order
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&Rc<Todo>),
    {
        self.todos.iter().for_each(visit);
    }

    /// Iterates over the todos in order
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Todo>> {
        self.todos.iter()
    }

    /// Builds a new list with the same title holding the todos that match
    ///
    /// The todos are shared with this list, not copied.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        TodoList {
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .filter(|todo| predicate(todo))
                .cloned()
                .collect(),
        }
    }

    /// Returns a view of the done todos
    pub fn all_done(&self) -> TodoList {
        self.filter(|todo| todo.is_done())
    }

    /// Returns a view of the todos not yet done
    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }

    /// Returns the first todo whose title matches exactly
    pub fn find_by_title(&self, title: &str) -> Option<Rc<Todo>> {
        self.filter(|todo| todo.title() == title).first().cloned()
    }

    /// Marks the first todo with a matching title done
    ///
    /// Does nothing when no todo matches.
    pub fn mark_done(&self, title: &str) {
        if let Some(todo) = self.find_by_title(title) {
            todo.mark_done();
        }
    }

    /// Returns the number of done todos
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    /// Returns the number of todos not yet done
    pub fn not_done_count(&self) -> usize {
        self.size() - self.done_count()
    }

    /// Returns a shallow snapshot of the todos
    ///
    /// Changing the returned vector leaves the list untouched; the todos
    /// themselves are still shared.
    pub fn to_array(&self) -> Vec<Rc<Todo>> {
        self.todos.clone()
    }

    fn validate_index(&self, index: usize) -> Result<(), TodoListError> {
        self.item_at(index).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Rc<Todo>;
    type IntoIter = std::slice::Iter<'a, Rc<Todo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{}", todo)?;
        }
        Ok(())
    }
}
