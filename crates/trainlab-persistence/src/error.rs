//! Persistence Layer Error Types

use thiserror::Error;

use trainlab_domain::{errors::DomainError, value_objects::ProjectId};

/// Errors raised by the storage backends
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A write would take a project past the backend's example limit
    #[error("Project {projectid} is limited to {limit} training examples")]
    CapacityExceeded { projectid: String, limit: usize },
}

impl PersistenceError {
    pub fn capacity_exceeded(projectid: &ProjectId, limit: usize) -> Self {
        Self::CapacityExceeded {
            projectid: projectid.to_string(),
            limit,
        }
    }
}

/// Storage errors surface to callers as store failures
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::StoreFailure {
            reason: err.to_string(),
        }
    }
}
