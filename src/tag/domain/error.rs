//! Error types for tag validation.

use crate::ids::ProjectId;
use thiserror::Error;

/// Errors returned while constructing tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagDomainError {
    /// The tag name is empty.
    #[error("tag name must not be empty")]
    EmptyName,

    /// The color is not a `#RRGGBB` hex value.
    #[error("invalid tag color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    /// Another tag in the project already uses the name.
    #[error("tag '{name}' already exists in project {project_id}")]
    AlreadyExists {
        /// Project that owns the conflicting tag.
        project_id: ProjectId,
        /// Conflicting tag name.
        name: String,
    },
}
