//! Domain model for task comments.

mod comment;
mod error;

pub use comment::{Comment, PersistedCommentData};
pub use error::CommentDomainError;
