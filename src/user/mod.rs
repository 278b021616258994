//! User identities referenced by the rest of the domain.
//!
//! Users carry no behaviour of their own; other contexts refer to them by
//! [`crate::ids::UserId`] when checking ownership and authorship.

pub mod domain;
