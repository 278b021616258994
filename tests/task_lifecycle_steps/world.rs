//! Shared world state for task lifecycle BDD scenarios.

use crate::test_helpers::FixedClock;
use rstest::fixture;
use taskboard::{
    ids::{ProjectId, TaskId, UserId},
    task::domain::{NewTask, Task, TaskDomainError, TaskStatus},
};

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub clock: FixedClock,
    pub task: Option<Task>,
    pub last_result: Option<Result<(), TaskDomainError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with no task yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: FixedClock::base(),
            task: None,
            last_result: None,
        }
    }

    /// Builds the request for the scenario task.
    #[must_use]
    pub fn task_request(status: TaskStatus) -> NewTask {
        NewTask::new(
            TaskId::new("t1"),
            ProjectId::new("p1"),
            UserId::new("reporter"),
            "Scenario task",
        )
        .with_status(status)
    }

    /// Returns the scenario task.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the outcome of the last lifecycle operation.
    pub fn last_result(&self) -> Result<&Result<(), TaskDomainError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing lifecycle result"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Parses a status written in a feature file.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
