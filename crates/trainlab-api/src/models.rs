//! API request and response models

use serde::{Deserialize, Serialize};
use trainlab_domain::TextTraining;
use utoipa::ToSchema;

/// Body of a store-training request.
///
/// Both fields are optional at the wire level so that their absence is
/// reported as `Missing data` rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StoreTrainingRequest {
    /// Text of the example
    pub data: Option<String>,
    /// Label for the example
    pub label: Option<String>,
}

/// Body of a rename-label request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EditLabelRequest {
    /// Label to replace
    pub before: Option<String>,
    /// Replacement label
    pub after: Option<String>,
}

/// Result of renaming a label
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditLabelResponse {
    /// Number of examples relabelled
    pub renamed: usize,
}

/// A stored training example, as returned after creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponse {
    /// Example id
    pub id: String,
    /// Owning project
    pub projectid: String,
    /// Example text
    pub textdata: String,
    /// Assigned label
    pub label: String,
}

impl From<TextTraining> for TrainingResponse {
    fn from(training: TextTraining) -> Self {
        Self {
            id: training.id.to_string(),
            projectid: training.projectid.to_string(),
            textdata: training.textdata,
            label: training.label,
        }
    }
}

/// A training example in a listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingItem {
    /// Example id
    pub id: String,
    /// Example text
    pub textdata: String,
    /// Assigned label
    pub label: String,
}

impl From<TextTraining> for TrainingItem {
    fn from(training: TextTraining) -> Self {
        Self {
            id: training.id.to_string(),
            textdata: training.textdata,
            label: training.label,
        }
    }
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}
