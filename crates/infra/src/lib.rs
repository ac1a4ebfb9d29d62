//! Infrastructure layer: entity storage adapters.

pub mod repository;

pub use repository::{InMemoryRepository, Repository};
