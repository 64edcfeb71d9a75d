//! Errors raised by list operations

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoListError {
    /// The position is not currently occupied
    #[error("invalid index: {index}")]
    InvalidIndex { index: usize, size: usize },
}
