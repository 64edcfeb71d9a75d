//! Todo List - an in-memory list of completable todos
//!
//! A [`TodoList`] keeps titled [`Todo`]s in insertion order and offers
//! indexed access, bulk marking, derived views that share their todos with
//! the source list, title search, and a fixed plain-text rendering.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{Todo, TodoList, TodoListError};
