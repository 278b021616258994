//! Comments attached to tasks.
//!
//! Only a comment's author may edit or delete it; there is no moderator
//! override at this layer.

pub mod domain;

#[cfg(test)]
mod tests;
