//! Step definitions for project membership scenarios.

pub mod given;
pub mod world;
