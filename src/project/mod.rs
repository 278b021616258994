//! Projects and their membership sets.
//!
//! A project is owned by one user and grants access to a set of members.
//! The owner is always a member and can never be removed; deleting the
//! project is reserved to the owner.

pub mod domain;

#[cfg(test)]
mod tests;
