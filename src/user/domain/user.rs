//! User identity record.

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Identity record for a person using the tracker.
///
/// Email and name are stored as supplied; validating them is the calling
/// layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user record stamped with the current clock time.
    #[must_use]
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            email: email.into(),
            name: name.into(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
