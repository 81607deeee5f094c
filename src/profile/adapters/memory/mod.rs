//! In-memory profile repository.

mod repository;

pub use repository::InMemoryProfileRepository;
