//! Task aggregate root.

use super::{TaskDomainError, TaskStatus};
use crate::ids::{ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    parent_task_id: Option<TaskId>,
    reporter_id: UserId,
    assignee_id: Option<UserId>,
    title: String,
    description: String,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a task.
///
/// The initial status is taken as given; the state machine only governs
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Caller-assigned task identifier.
    pub id: TaskId,
    /// Project the task belongs to.
    pub project_id: ProjectId,
    /// Parent task when this is a subtask.
    pub parent_task_id: Option<TaskId>,
    /// User who reported the task.
    pub reporter_id: UserId,
    /// User the task is assigned to, if any.
    pub assignee_id: Option<UserId>,
    /// Short task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Deadline, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates a `todo` task request with no parent, assignee, or due date.
    #[must_use]
    pub fn new(
        id: TaskId,
        project_id: ProjectId,
        reporter_id: UserId,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            project_id,
            parent_task_id: None,
            reporter_id,
            assignee_id: None,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            due_date: None,
        }
    }

    /// Sets the parent task.
    #[must_use]
    pub fn with_parent(mut self, parent_task_id: TaskId) -> Self {
        self.parent_task_id = Some(parent_task_id);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted parent task, if any.
    pub parent_task_id: Option<TaskId>,
    /// Persisted reporter.
    pub reporter_id: UserId,
    /// Persisted assignee, if any.
    pub assignee_id: Option<UserId>,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task stamped with the current clock time.
    #[must_use]
    pub fn new(params: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: params.id,
            project_id: params.project_id,
            parent_task_id: params.parent_task_id,
            reporter_id: params.reporter_id,
            assignee_id: params.assignee_id,
            title: params.title,
            description: params.description,
            status: params.status,
            due_date: params.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            parent_task_id: data.parent_task_id,
            reporter_id: data.reporter_id,
            assignee_id: data.assignee_id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the parent task, if any.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<&TaskId> {
        self.parent_task_id.as_ref()
    }

    /// Returns whether this task is nested under another task.
    #[must_use]
    pub const fn is_subtask(&self) -> bool {
        self.parent_task_id.is_some()
    }

    /// Returns the reporter.
    #[must_use]
    pub const fn reporter_id(&self) -> &UserId {
        &self.reporter_id
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the current status may move to `next`.
    #[must_use]
    pub const fn can_transition_to(&self, next: TaskStatus) -> bool {
        self.status.can_transition_to(next)
    }

    /// Moves the task to `next` along the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the table does not
    /// allow the move. The task is left untouched.
    pub fn transition_to(
        &mut self,
        next: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.can_transition_to(next) {
            tracing::debug!(task_id = %self.id, from = %self.status, to = %next, "transition rejected");
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }

        tracing::debug!(task_id = %self.id, from = %self.status, to = %next, "task transitioned");
        self.status = next;
        self.touch(clock);
        Ok(())
    }

    /// Marks the task done from any open status.
    ///
    /// Unlike [`Self::transition_to`], this allows `todo` → `done` directly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when the task is already
    /// done.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.status == TaskStatus::Done {
            return Err(TaskDomainError::AlreadyCompleted(self.id.clone()));
        }

        tracing::debug!(task_id = %self.id, from = %self.status, "task completed");
        self.status = TaskStatus::Done;
        self.touch(clock);
        Ok(())
    }

    /// Returns whether the due date has passed while the task is still open.
    ///
    /// The clock is read on every call; a task without a due date is never
    /// overdue, and neither is a done task.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        if self.status == TaskStatus::Done {
            return false;
        }
        self.due_date.is_some_and(|due| clock.utc() > due)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
