//! Domain errors for TrainLab

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound { entity_type: String, id: String },

    #[error("Access forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Operation {operation} is not implemented for {project_type} projects")]
    NotImplemented {
        project_type: String,
        operation: String,
    },

    #[error("Invalid project type: {value}")]
    InvalidProjectType { value: String },

    #[error("Store failure: {reason}")]
    StoreFailure { reason: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// Required field absent or empty
    pub fn missing(field: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: "missing".to_string(),
        }
    }

    /// Whether this is the "required field absent" flavour of validation error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::ValidationError { reason, .. } if reason == "missing")
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
