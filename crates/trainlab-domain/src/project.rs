//! Project entity
//!
//! A project is a named, typed container of training examples owned by one
//! student within a class. Projects are created and removed elsewhere; the
//! training data layer only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{ProjectId, ProjectType};

/// Maximum length of a project name
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    userid: String,
    classid: String,
    #[serde(rename = "type")]
    project_type: ProjectType,
    name: String,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Create new project with invariant validation
    ///
    /// # Errors
    /// Returns `ValidationError` if the owner, class or name is empty, or the
    /// name exceeds [`MAX_PROJECT_NAME_LENGTH`].
    pub fn create(
        userid: impl Into<String>,
        classid: impl Into<String>,
        project_type: ProjectType,
        name: impl Into<String>,
    ) -> DomainResult<Self> {
        let userid = userid.into();
        let classid = classid.into();
        let name = name.into();

        if userid.trim().is_empty() {
            return Err(DomainError::missing("userid"));
        }
        if classid.trim().is_empty() {
            return Err(DomainError::missing("classid"));
        }
        Self::validate_name(&name)?;

        Ok(Self {
            id: ProjectId::new(),
            userid,
            classid,
            project_type,
            name,
            created_at: Utc::now(),
        })
    }

    fn validate_name(name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::missing("name"));
        }
        if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
            return Err(DomainError::ValidationError {
                field: "name".to_string(),
                reason: format!("cannot exceed {} characters", MAX_PROJECT_NAME_LENGTH),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Owning student
    pub fn userid(&self) -> &str {
        &self.userid
    }

    /// Class (tenant) the project belongs to
    pub fn classid(&self) -> &str {
        &self.classid
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `studentid` owns this project
    pub fn is_owned_by(&self, studentid: &str) -> bool {
        self.userid == studentid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project() {
        let project = Project::create("student-1", "class-1", ProjectType::Text, "demo").unwrap();
        assert_eq!(project.userid(), "student-1");
        assert_eq!(project.classid(), "class-1");
        assert_eq!(project.project_type(), ProjectType::Text);
        assert_eq!(project.name(), "demo");
        assert!(project.is_owned_by("student-1"));
        assert!(!project.is_owned_by("DIFFERENTUSER"));
    }

    #[test]
    fn test_create_project_requires_name() {
        let result = Project::create("student-1", "class-1", ProjectType::Text, "  ");
        assert!(matches!(result, Err(DomainError::ValidationError { ref field, .. }) if field == "name"));
    }

    #[test]
    fn test_create_project_name_too_long() {
        let result = Project::create("student-1", "class-1", ProjectType::Images, "a".repeat(101));
        assert!(result.is_err());
    }

    #[test]
    fn test_project_serializes_type_field() {
        let project = Project::create("s", "c", ProjectType::Numbers, "demo").unwrap();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "numbers");
    }
}
