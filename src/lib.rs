//! Taskdeck: domain core of a personal to-do list.
//!
//! Users sign up, sign in, keep an ordered list of tasks, move each task
//! through the pending → in-progress → completed cycle, and see statistics
//! on their profile page. Persistence and authentication are reached through
//! port traits with in-memory and `PostgreSQL` adapters.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`task`]: Task status machine, ordering, filters, statistics and the
//!   session board
//! - [`profile`]: User profiles and the profile overview
//! - [`auth`]: Credentials, sessions and account management
//! - [`config`]: Database settings and connection pooling

pub mod auth;
pub mod config;
pub mod profile;
pub mod task;
