//! Type-dispatched training store
//!
//! Each [`ProjectType`] maps to one [`TrainingStore`]. Only text projects
//! have a backing store today; images and numbers projects get an
//! [`UnimplementedTrainingStore`] whose every operation fails with
//! `NotImplemented` without touching persistence.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::{DomainError, DomainResult},
    pagination::{Page, PagingOptions},
    repositories::TextTrainingRepository,
    training::{LabelCounts, NewTextTraining, TextTraining, DEFAULT_MAX_TEXT_LENGTH},
    value_objects::{ProjectId, ProjectType, TrainingId},
};

/// Unvalidated example as submitted by a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleInput {
    pub data: Option<String>,
    pub label: Option<String>,
}

impl ExampleInput {
    pub fn new(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            label: Some(label.into()),
        }
    }
}

/// Training data capabilities of one project type
#[async_trait]
pub trait TrainingStore: Send + Sync {
    /// Validate and store one example
    async fn store_one(&self, projectid: &ProjectId, input: ExampleInput)
        -> DomainResult<TextTraining>;

    /// Validate and store many examples; nothing is stored if any is invalid
    async fn store_bulk(
        &self,
        projectid: &ProjectId,
        examples: Vec<NewTextTraining>,
    ) -> DomainResult<()>;

    async fn list_page(
        &self,
        projectid: &ProjectId,
        options: PagingOptions,
    ) -> DomainResult<Page<TextTraining>>;

    async fn count_by_label(&self, projectid: &ProjectId) -> DomainResult<LabelCounts>;

    /// Delete one example, `EntityNotFound` if the project has no such example
    async fn delete_one(&self, projectid: &ProjectId, id: &TrainingId) -> DomainResult<()>;

    async fn delete_all_for_project(&self, projectid: &ProjectId) -> DomainResult<()>;

    /// Relabel every example labelled `before`; matching nothing is fine
    async fn rename_label(&self, projectid: &ProjectId, before: &str, after: &str)
        -> DomainResult<usize>;
}

/// Store for text projects, backed by a [`TextTrainingRepository`]
pub struct TextTrainingStore {
    repository: Arc<dyn TextTrainingRepository>,
    max_text_length: usize,
}

impl TextTrainingStore {
    pub fn new(repository: Arc<dyn TextTrainingRepository>) -> Self {
        Self {
            repository,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }
}

#[async_trait]
impl TrainingStore for TextTrainingStore {
    async fn store_one(
        &self,
        projectid: &ProjectId,
        input: ExampleInput,
    ) -> DomainResult<TextTraining> {
        let example = NewTextTraining::from_parts(input.data, input.label)?;
        example.validate(self.max_text_length)?;
        self.repository.store(projectid, example).await
    }

    async fn store_bulk(
        &self,
        projectid: &ProjectId,
        examples: Vec<NewTextTraining>,
    ) -> DomainResult<()> {
        for example in &examples {
            example.validate(self.max_text_length)?;
        }
        self.repository.bulk_store(projectid, examples).await
    }

    async fn list_page(
        &self,
        projectid: &ProjectId,
        options: PagingOptions,
    ) -> DomainResult<Page<TextTraining>> {
        self.repository.list(projectid, options).await
    }

    async fn count_by_label(&self, projectid: &ProjectId) -> DomainResult<LabelCounts> {
        self.repository.count_by_label(projectid).await
    }

    async fn delete_one(&self, projectid: &ProjectId, id: &TrainingId) -> DomainResult<()> {
        if self.repository.delete_by_id(projectid, id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Training", id.as_str()))
        }
    }

    async fn delete_all_for_project(&self, projectid: &ProjectId) -> DomainResult<()> {
        self.repository.delete_by_project(projectid).await
    }

    async fn rename_label(
        &self,
        projectid: &ProjectId,
        before: &str,
        after: &str,
    ) -> DomainResult<usize> {
        if before.is_empty() {
            return Err(DomainError::missing("before"));
        }
        if after.is_empty() {
            return Err(DomainError::missing("after"));
        }
        if before == after {
            return Ok(0);
        }
        self.repository.rename_label(projectid, before, after).await
    }
}

/// Placeholder store for project types without training data support
#[derive(Debug, Clone, Copy)]
pub struct UnimplementedTrainingStore {
    project_type: ProjectType,
}

impl UnimplementedTrainingStore {
    pub fn new(project_type: ProjectType) -> Self {
        Self { project_type }
    }

    fn refuse<T>(&self, operation: &str) -> DomainResult<T> {
        Err(DomainError::NotImplemented {
            project_type: self.project_type.to_string(),
            operation: operation.to_string(),
        })
    }
}

#[async_trait]
impl TrainingStore for UnimplementedTrainingStore {
    async fn store_one(&self, _: &ProjectId, _: ExampleInput) -> DomainResult<TextTraining> {
        self.refuse("store training")
    }

    async fn store_bulk(&self, _: &ProjectId, _: Vec<NewTextTraining>) -> DomainResult<()> {
        self.refuse("bulk store training")
    }

    async fn list_page(&self, _: &ProjectId, _: PagingOptions) -> DomainResult<Page<TextTraining>> {
        self.refuse("list training")
    }

    async fn count_by_label(&self, _: &ProjectId) -> DomainResult<LabelCounts> {
        self.refuse("count labels")
    }

    async fn delete_one(&self, _: &ProjectId, _: &TrainingId) -> DomainResult<()> {
        self.refuse("delete training")
    }

    async fn delete_all_for_project(&self, _: &ProjectId) -> DomainResult<()> {
        self.refuse("delete project training")
    }

    async fn rename_label(&self, _: &ProjectId, _: &str, _: &str) -> DomainResult<usize> {
        self.refuse("rename label")
    }
}

/// One store per project type
#[derive(Clone)]
pub struct TrainingStores {
    text: Arc<dyn TrainingStore>,
    images: Arc<dyn TrainingStore>,
    numbers: Arc<dyn TrainingStore>,
}

impl TrainingStores {
    /// Text backed by `text`, images and numbers unimplemented
    pub fn new(text: TextTrainingStore) -> Self {
        Self {
            text: Arc::new(text),
            images: Arc::new(UnimplementedTrainingStore::new(ProjectType::Images)),
            numbers: Arc::new(UnimplementedTrainingStore::new(ProjectType::Numbers)),
        }
    }

    pub fn for_type(&self, project_type: ProjectType) -> &dyn TrainingStore {
        match project_type {
            ProjectType::Text => self.text.as_ref(),
            ProjectType::Images => self.images.as_ref(),
            ProjectType::Numbers => self.numbers.as_ref(),
        }
    }
}
