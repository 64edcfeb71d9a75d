//! Domain models for the todo list
//!
//! Contains the core list logic without any I/O concerns.

mod error;
mod todo;
mod todo_list;

pub use error::TodoListError;
pub use todo::Todo;
pub use todo_list::TodoList;
