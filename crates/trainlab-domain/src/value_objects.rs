//! Value objects representing immutable domain concepts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Project identifier
///
/// Freshly generated ids are UUIDs, but any string coming in from a request
/// path is accepted as-is: an id that matches nothing is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a new random project ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Training example identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingId(String);

impl TrainingId {
    /// Generate a new random training ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrainingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TrainingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TrainingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for TrainingId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of training data a project collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Text,
    Images,
    Numbers,
}

impl ProjectType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Text => "text",
            ProjectType::Images => "images",
            ProjectType::Numbers => "numbers",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ProjectType::Text),
            "images" => Ok(ProjectType::Images),
            "numbers" => Ok(ProjectType::Numbers),
            other => Err(DomainError::InvalidProjectType {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
        assert_ne!(TrainingId::new(), TrainingId::new());
    }

    #[test]
    fn test_arbitrary_path_ids_are_accepted() {
        let id = ProjectId::from("differentprojectid");
        assert_eq!(id.as_str(), "differentprojectid");
    }

    #[test]
    fn test_project_type_parsing() {
        assert_eq!("text".parse::<ProjectType>().unwrap(), ProjectType::Text);
        assert_eq!("images".parse::<ProjectType>().unwrap(), ProjectType::Images);
        assert_eq!("numbers".parse::<ProjectType>().unwrap(), ProjectType::Numbers);
        assert!(matches!(
            "sounds".parse::<ProjectType>(),
            Err(DomainError::InvalidProjectType { .. })
        ));
    }

    #[test]
    fn test_project_type_serde_uses_lowercase() {
        let json = serde_json::to_string(&ProjectType::Images).unwrap();
        assert_eq!(json, "\"images\"");
    }
}
