//! Error taxonomy for the task and user aggregates.
//!
//! Store operations wrap the underlying SQLite error, aggregate operations add
//! their own variants for validation, capacity and index handling.

use crate::libs::notifier::NotifyError;
use crate::libs::validation::ValidationIssue;
use std::fmt;
use thiserror::Error;

/// Errors produced by the stores and the user aggregate.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The user failed one or more validation rules.
    #[error("validation failed: {}", join_issues(.0))]
    ValidationFailure(Vec<ValidationIssue>),

    /// A statement could not be prepared or executed.
    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// The admission policy's hard limit was reached.
    #[error("you have too many tasks (limit is {limit})")]
    CapacityExceeded { limit: usize },

    /// Position-based task access outside of the owned collection.
    #[error("task index {index} is out of range (user has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Notification(#[from] NotifyError),

    /// One or more owned tasks could not be written during a user save.
    #[error("failed to save {} task(s): {}", .0.len(), join_failures(.0))]
    TaskSaveFailed(Vec<TaskSaveFailure>),
}

/// A single task that failed to persist while saving its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSaveFailure {
    /// Position of the task in the user's collection
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for TaskSaveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.index, self.reason)
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn join_failures(failures: &[TaskSaveFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
