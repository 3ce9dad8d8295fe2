//! In-memory project store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use trainlab_domain::{
    errors::DomainResult, project::Project, repositories::ProjectRepository,
    value_objects::ProjectId,
};

/// In-memory [`ProjectRepository`] keyed by project id.
///
/// Lookups are scoped to a class: a project stored under one class is
/// invisible when asked for under another.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// Create a new empty in-memory project repository
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// Repository seeded with `projects`
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let map: HashMap<ProjectId, Project> = projects
            .into_iter()
            .map(|p| (p.id().clone(), p))
            .collect();
        Self {
            projects: RwLock::new(map),
        }
    }

    /// Number of stored projects
    pub fn count(&self) -> usize {
        self.projects.read().len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> DomainResult<()> {
        let mut projects = self.projects.write();
        projects.insert(project.id().clone(), project.clone());
        Ok(())
    }

    async fn find(&self, classid: &str, id: &ProjectId) -> DomainResult<Option<Project>> {
        let projects = self.projects.read();
        Ok(projects
            .get(id)
            .filter(|project| project.classid() == classid)
            .cloned())
    }

    async fn delete(&self, id: &ProjectId) -> DomainResult<()> {
        let mut projects = self.projects.write();
        projects.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainlab_domain::value_objects::ProjectType;

    fn create_test_project(classid: &str) -> Project {
        Project::create("student-1", classid, ProjectType::Text, "demo").unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryProjectRepository::new();
        let project = create_test_project("class-1");
        let id = project.id().clone();

        repo.save(&project).await.unwrap();

        let found = repo.find("class-1", &id).await.unwrap();
        assert_eq!(found, Some(project));
    }

    #[tokio::test]
    async fn test_find_is_scoped_to_class() {
        let repo = InMemoryProjectRepository::new();
        let project = create_test_project("class-1");
        let id = project.id().clone();
        repo.save(&project).await.unwrap();

        assert!(repo.find("class-2", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let repo = InMemoryProjectRepository::new();
        let found = repo.find("class-1", &ProjectId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let project = create_test_project("class-1");
        let id = project.id().clone();
        let repo = InMemoryProjectRepository::with_projects(vec![project]);
        assert_eq!(repo.count(), 1);

        repo.delete(&id).await.unwrap();
        repo.delete(&id).await.unwrap();
        assert_eq!(repo.count(), 0);
    }
}
