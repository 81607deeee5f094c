//! Step definitions for account scenarios.

pub mod given;
pub mod when;
pub mod world;
