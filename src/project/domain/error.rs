//! Error types for project validation and membership changes.

use crate::ids::UserId;
use thiserror::Error;

/// Errors returned by project construction and membership operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty.
    #[error("project name must not be empty")]
    EmptyName,

    /// The user already belongs to the project.
    #[error("user {0} is already a member")]
    AlreadyMember(UserId),

    /// The user does not belong to the project.
    #[error("user {0} is not a member")]
    NotMember(UserId),

    /// The owner cannot leave their own project.
    #[error("cannot remove owner {0} from project")]
    CannotRemoveOwner(UserId),

    /// The user does not own the project.
    #[error("user {0} is not the project owner")]
    NotOwner(UserId),
}
