//! Domain model for user identities.

mod user;

pub use user::User;
