//! Task-tag association record.

use crate::ids::{TagId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Links a task to a tag.
///
/// The pair is not validated here: uniqueness and the existence of the
/// referenced task and tag belong to the calling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTag {
    task_id: TaskId,
    tag_id: TagId,
    created_at: DateTime<Utc>,
}

impl TaskTag {
    /// Creates an association stamped with the current clock time.
    #[must_use]
    pub fn new(task_id: TaskId, tag_id: TagId, clock: &impl Clock) -> Self {
        Self {
            task_id,
            tag_id,
            created_at: clock.utc(),
        }
    }

    /// Returns the tagged task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the applied tag.
    #[must_use]
    pub const fn tag_id(&self) -> &TagId {
        &self.tag_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
