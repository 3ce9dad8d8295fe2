//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of the domain repository
//! interfaces. Each operation holds the lock for its whole duration, so
//! bulk stores and label renames are never observed half done.

mod project_repository;
mod text_training_repository;

pub use project_repository::InMemoryProjectRepository;
pub use text_training_repository::InMemoryTextTrainingRepository;
