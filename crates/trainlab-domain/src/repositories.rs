//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts; implementations live in
//! `trainlab-persistence`. Every method is a single atomic operation from
//! the caller's point of view.

use async_trait::async_trait;

use crate::{
    errors::DomainResult,
    pagination::{Page, PagingOptions},
    project::Project,
    training::{LabelCounts, NewTextTraining, TextTraining},
    value_objects::{ProjectId, TrainingId},
};

/// Repository for project records
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a project, replacing any project with the same id
    async fn save(&self, project: &Project) -> DomainResult<()>;

    /// Find a project by id within a class
    async fn find(&self, classid: &str, id: &ProjectId) -> DomainResult<Option<Project>>;

    /// Delete a project by id. Deleting an unknown id is not an error.
    async fn delete(&self, id: &ProjectId) -> DomainResult<()>;
}

/// Repository for text training examples
#[async_trait]
pub trait TextTrainingRepository: Send + Sync {
    /// Store one example
    async fn store(&self, projectid: &ProjectId, example: NewTextTraining)
        -> DomainResult<TextTraining>;

    /// Store many examples at once; either all are stored or none are
    async fn bulk_store(
        &self,
        projectid: &ProjectId,
        examples: Vec<NewTextTraining>,
    ) -> DomainResult<()>;

    /// Examples of a project in insertion order, narrowed by `options`
    async fn list(
        &self,
        projectid: &ProjectId,
        options: PagingOptions,
    ) -> DomainResult<Page<TextTraining>>;

    /// Number of examples per label
    async fn count_by_label(&self, projectid: &ProjectId) -> DomainResult<LabelCounts>;

    /// Delete one example, scoped to the project.
    ///
    /// Returns `false` when no example with that id exists in that project.
    async fn delete_by_id(&self, projectid: &ProjectId, id: &TrainingId) -> DomainResult<bool>;

    /// Delete every example of a project
    async fn delete_by_project(&self, projectid: &ProjectId) -> DomainResult<()>;

    /// Relabel every example of the project labelled `before`.
    ///
    /// Returns the number of examples changed.
    async fn rename_label(&self, projectid: &ProjectId, before: &str, after: &str)
        -> DomainResult<usize>;
}
