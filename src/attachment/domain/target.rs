//! Kind of entity an attachment hangs off.

use super::ParseAttachmentTargetError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity kind an attachment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentTargetType {
    /// Attached directly to a task.
    Task,
    /// Attached to a comment on a task.
    Comment,
}

impl AttachmentTargetType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for AttachmentTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AttachmentTargetType {
    type Error = ParseAttachmentTargetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "task" => Ok(Self::Task),
            "comment" => Ok(Self::Comment),
            _ => Err(ParseAttachmentTargetError(value.to_owned())),
        }
    }
}
