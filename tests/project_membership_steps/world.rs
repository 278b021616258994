//! Shared world state for project membership BDD scenarios.

use crate::test_helpers::FixedClock;
use rstest::fixture;
use taskboard::project::domain::{Project, ProjectDomainError};

/// Scenario world for project membership behaviour tests.
pub struct ProjectMembershipWorld {
    pub clock: FixedClock,
    pub project: Option<Project>,
    pub last_result: Option<Result<(), ProjectDomainError>>,
}

impl ProjectMembershipWorld {
    /// Creates a world with no project yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: FixedClock::base(),
            project: None,
            last_result: None,
        }
    }

    /// Returns the scenario project.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the outcome of the last membership change.
    pub fn last_result(&self) -> Result<&Result<(), ProjectDomainError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing membership result"))
    }
}

impl Default for ProjectMembershipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectMembershipWorld {
    ProjectMembershipWorld::default()
}
