//! Error types for comment validation and edits.

use crate::ids::UserId;
use thiserror::Error;

/// Errors returned by comment construction and edits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The comment body is empty.
    #[error("comment body must not be empty")]
    EmptyBody,

    /// The user did not write the comment.
    #[error("user {0} is not the comment author")]
    NotAuthor(UserId),
}
