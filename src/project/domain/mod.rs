//! Domain model for projects and project membership.

mod error;
mod project;

pub use error::ProjectDomainError;
pub use project::{PersistedProjectData, Project};
