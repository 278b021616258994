//! Domain model for tags and task-tag associations.

mod color;
mod error;
mod tag;
mod task_tag;

pub use color::TagColor;
pub use error::TagDomainError;
pub use tag::{PersistedTagData, Tag, ensure_tag_name_available};
pub use task_tag::TaskTag;
