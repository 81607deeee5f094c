//! To-do task lifecycle for taskdeck.
//!
//! Users create tasks, move them through the pending → in-progress →
//! completed cycle, rename, reorder and delete them. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
