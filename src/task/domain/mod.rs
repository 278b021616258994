//! Domain model for tasks and their status lifecycle.

mod error;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
