//! Error types for task lifecycle operations and parsing.

use super::TaskStatus;
use crate::ids::TaskId;
use thiserror::Error;

/// Errors returned by task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status change is not in the transition table.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status before the attempted transition.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The task is already done.
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
