//! Training examples and label aggregates

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{ProjectId, TrainingId};

/// Default upper bound on the length of a text training example
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1024;

/// One labelled piece of text belonging to a text project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTraining {
    pub id: TrainingId,
    pub projectid: ProjectId,
    pub textdata: String,
    pub label: String,
}

impl TextTraining {
    /// Assign a fresh id to a validated example
    pub fn new(projectid: ProjectId, example: NewTextTraining) -> Self {
        Self {
            id: TrainingId::new(),
            projectid,
            textdata: example.textdata,
            label: example.label,
        }
    }
}

/// A text example that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTextTraining {
    pub textdata: String,
    pub label: String,
}

impl NewTextTraining {
    pub fn new(textdata: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            textdata: textdata.into(),
            label: label.into(),
        }
    }

    /// Build from optional request fields, rejecting absent or empty values.
    ///
    /// `data` is checked first so a request with neither field reports the
    /// missing data.
    pub fn from_parts(data: Option<String>, label: Option<String>) -> DomainResult<Self> {
        let textdata = data
            .filter(|d| !d.is_empty())
            .ok_or_else(|| DomainError::missing("data"))?;
        let label = label
            .filter(|l| !l.is_empty())
            .ok_or_else(|| DomainError::missing("label"))?;
        Ok(Self { textdata, label })
    }

    /// Enforce the non-empty and length invariants
    pub fn validate(&self, max_text_length: usize) -> DomainResult<()> {
        if self.textdata.is_empty() {
            return Err(DomainError::missing("data"));
        }
        if self.label.is_empty() {
            return Err(DomainError::missing("label"));
        }
        if self.textdata.chars().count() > max_text_length {
            return Err(DomainError::ValidationError {
                field: "data".to_string(),
                reason: format!(
                    "Text exceeds maximum allowed length ({} characters)",
                    max_text_length
                ),
            });
        }
        Ok(())
    }
}

/// Number of examples per label within one project.
///
/// Derived on demand, never stored. Serializes as a flat JSON object,
/// e.g. `{"fruit": 2, "vegetable": 3}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCounts(BTreeMap<String, u64>);

impl LabelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally labels from an iterator of label strings
    pub fn tally<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = BTreeMap::new();
        for label in labels {
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, label: &str) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of examples across all labels
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}
