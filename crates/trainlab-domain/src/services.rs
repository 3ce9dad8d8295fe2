//! Training data service
//!
//! Composes project resolution, the ownership rule and the type-dispatched
//! store. Every operation resolves the project first (`EntityNotFound` when
//! the class has no such project), then checks that the project belongs to
//! the student named in the request, then hands over to the store for the
//! project's type.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    access::StudentScope,
    errors::{DomainError, DomainResult},
    pagination::{Page, PagingOptions, RangeRequest},
    project::Project,
    repositories::ProjectRepository,
    store::{ExampleInput, TrainingStore, TrainingStores},
    training::{LabelCounts, NewTextTraining, TextTraining},
    value_objects::{ProjectId, ProjectType, TrainingId},
};

/// Training data operations for a student's projects
#[derive(Clone)]
pub struct TrainingService {
    projects: Arc<dyn ProjectRepository>,
    stores: TrainingStores,
}

impl TrainingService {
    pub fn new(projects: Arc<dyn ProjectRepository>, stores: TrainingStores) -> Self {
        Self { projects, stores }
    }

    /// Load a project by class and id
    pub async fn resolve_project(&self, classid: &str, projectid: &ProjectId) -> DomainResult<Project> {
        self.projects
            .find(classid, projectid)
            .await?
            .ok_or_else(|| DomainError::not_found("Project", projectid.as_str()))
    }

    async fn store_for_owned_project(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
    ) -> DomainResult<&dyn TrainingStore> {
        let project = self.resolve_project(&scope.class_id, projectid).await?;
        if !project.is_owned_by(&scope.student_id) {
            return Err(DomainError::forbidden(format!(
                "project {} does not belong to student {}",
                projectid, scope.student_id
            )));
        }
        Ok(self.stores.for_type(project.project_type()))
    }

    /// Example count per label across the whole project
    pub async fn get_labels(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
    ) -> DomainResult<LabelCounts> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        store.count_by_label(projectid).await
    }

    /// Examples in insertion order, optionally narrowed to a range
    pub async fn get_training(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
        range: Option<RangeRequest>,
    ) -> DomainResult<Page<TextTraining>> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        let page = store.list_page(projectid, PagingOptions::from(range)).await?;
        debug!(
            project_id = %projectid,
            returned = page.items.len(),
            total = page.total,
            "listed training"
        );
        Ok(page)
    }

    pub async fn store_training(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
        input: ExampleInput,
    ) -> DomainResult<TextTraining> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        let stored = store.store_one(projectid, input).await?;
        info!(project_id = %projectid, training_id = %stored.id, "stored training");
        Ok(stored)
    }

    pub async fn bulk_store_training(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
        examples: Vec<NewTextTraining>,
    ) -> DomainResult<()> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        let count = examples.len();
        store.store_bulk(projectid, examples).await?;
        info!(project_id = %projectid, count, "bulk stored training");
        Ok(())
    }

    pub async fn rename_label(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
        before: &str,
        after: &str,
    ) -> DomainResult<usize> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        let renamed = store.rename_label(projectid, before, after).await?;
        info!(project_id = %projectid, before, after, renamed, "renamed label");
        Ok(renamed)
    }

    /// Delete one example; the id must belong to this very project
    pub async fn delete_training(
        &self,
        scope: &StudentScope,
        projectid: &ProjectId,
        id: &TrainingId,
    ) -> DomainResult<()> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        store.delete_one(projectid, id).await?;
        info!(project_id = %projectid, training_id = %id, "deleted training");
        Ok(())
    }

    /// Delete every example of the project, keeping the project itself
    pub async fn clear_training(&self, scope: &StudentScope, projectid: &ProjectId) -> DomainResult<()> {
        let store = self.store_for_owned_project(scope, projectid).await?;
        store.delete_all_for_project(projectid).await?;
        info!(project_id = %projectid, "cleared training");
        Ok(())
    }

    /// Register a new project
    pub async fn create_project(
        &self,
        userid: &str,
        classid: &str,
        project_type: ProjectType,
        name: &str,
    ) -> DomainResult<Project> {
        let project = Project::create(userid, classid, project_type, name)?;
        self.projects.save(&project).await?;
        info!(project_id = %project.id(), class_id = classid, %project_type, "created project");
        Ok(project)
    }

    /// Remove a project and purge its training data.
    ///
    /// The store never cascades on its own, so text data is deleted here
    /// before the project record goes.
    pub async fn delete_project(&self, classid: &str, projectid: &ProjectId) -> DomainResult<()> {
        let project = self.resolve_project(classid, projectid).await?;
        if project.project_type() == ProjectType::Text {
            self.stores
                .for_type(ProjectType::Text)
                .delete_all_for_project(projectid)
                .await?;
        }
        self.projects.delete(projectid).await?;
        info!(project_id = %projectid, class_id = classid, "deleted project");
        Ok(())
    }
}
