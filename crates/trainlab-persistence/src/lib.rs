//! TrainLab Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the
//! interfaces defined in `trainlab-domain`.
//!
//! ## Usage
//!
//! ```ignore
//! use trainlab_domain::{TextTrainingStore, TrainingService, TrainingStores};
//! use trainlab_persistence::{InMemoryProjectRepository, InMemoryTextTrainingRepository};
//! use std::sync::Arc;
//!
//! let projects = Arc::new(InMemoryProjectRepository::new());
//! let training = Arc::new(InMemoryTextTrainingRepository::new());
//! let service = TrainingService::new(
//!     projects,
//!     TrainingStores::new(TextTrainingStore::new(training)),
//! );
//! ```

pub mod error;
pub mod memory;

pub use error::PersistenceError;

pub use memory::{InMemoryProjectRepository, InMemoryTextTrainingRepository};
