//! Identifier types shared across the taskboard domain.
//!
//! Identifiers are opaque strings assigned by the calling layer. The domain
//! never generates or validates them; the newtypes only keep one kind of
//! identifier from being passed where another is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a caller-assigned identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the owned identifier string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a user account.
    UserId
);

string_id!(
    /// Identifier of a project.
    ProjectId
);

string_id!(
    /// Identifier of a task within a project.
    TaskId
);

string_id!(
    /// Identifier of a project-scoped tag.
    TagId
);

string_id!(
    /// Identifier of a task comment.
    CommentId
);

string_id!(
    /// Identifier of a file attachment.
    AttachmentId
);
