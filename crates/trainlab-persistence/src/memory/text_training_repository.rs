//! In-memory text training store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::PersistenceError;
use trainlab_domain::{
    errors::DomainResult,
    pagination::{Page, PagingOptions},
    repositories::TextTrainingRepository,
    training::{LabelCounts, NewTextTraining, TextTraining},
    value_objects::{ProjectId, TrainingId},
};

/// In-memory [`TextTrainingRepository`]
///
/// Examples are kept per project in insertion order. An optional limit caps
/// how many examples a single project may hold.
#[derive(Debug, Default)]
pub struct InMemoryTextTrainingRepository {
    training: RwLock<HashMap<ProjectId, Vec<TextTraining>>>,
    max_per_project: Option<usize>,
}

impl InMemoryTextTrainingRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            training: RwLock::new(HashMap::new()),
            max_per_project: None,
        }
    }

    /// Create a repository that refuses writes beyond `limit` examples per project
    pub fn with_max_per_project(limit: usize) -> Self {
        Self {
            training: RwLock::new(HashMap::new()),
            max_per_project: Some(limit),
        }
    }

    fn ensure_room(
        &self,
        projectid: &ProjectId,
        existing: usize,
        adding: usize,
    ) -> Result<(), PersistenceError> {
        match self.max_per_project {
            Some(limit) if existing.saturating_add(adding) > limit => {
                Err(PersistenceError::capacity_exceeded(projectid, limit))
            }
            _ => Ok(()),
        }
    }

    /// Number of examples stored for a project (for testing)
    pub fn count(&self, projectid: &ProjectId) -> usize {
        self.training
            .read()
            .get(projectid)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl TextTrainingRepository for InMemoryTextTrainingRepository {
    async fn store(
        &self,
        projectid: &ProjectId,
        example: NewTextTraining,
    ) -> DomainResult<TextTraining> {
        let mut training = self.training.write();
        let examples = training.entry(projectid.clone()).or_default();
        self.ensure_room(projectid, examples.len(), 1)?;

        let stored = TextTraining::new(projectid.clone(), example);
        examples.push(stored.clone());
        Ok(stored)
    }

    async fn bulk_store(
        &self,
        projectid: &ProjectId,
        examples: Vec<NewTextTraining>,
    ) -> DomainResult<()> {
        if examples.is_empty() {
            return Ok(());
        }
        let mut training = self.training.write();
        let stored = training.entry(projectid.clone()).or_default();
        self.ensure_room(projectid, stored.len(), examples.len())?;

        stored.extend(
            examples
                .into_iter()
                .map(|example| TextTraining::new(projectid.clone(), example)),
        );
        Ok(())
    }

    async fn list(
        &self,
        projectid: &ProjectId,
        options: PagingOptions,
    ) -> DomainResult<Page<TextTraining>> {
        let training = self.training.read();
        let examples = training.get(projectid).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Page::slice(examples, options))
    }

    async fn count_by_label(&self, projectid: &ProjectId) -> DomainResult<LabelCounts> {
        let training = self.training.read();
        let examples = training.get(projectid).map(Vec::as_slice).unwrap_or(&[]);
        Ok(LabelCounts::tally(examples.iter().map(|e| e.label.as_str())))
    }

    async fn delete_by_id(&self, projectid: &ProjectId, id: &TrainingId) -> DomainResult<bool> {
        let mut training = self.training.write();
        let Some(examples) = training.get_mut(projectid) else {
            return Ok(false);
        };
        match examples.iter().position(|e| &e.id == id) {
            Some(index) => {
                examples.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_project(&self, projectid: &ProjectId) -> DomainResult<()> {
        let removed = self.training.write().remove(projectid);
        tracing::debug!(
            project_id = %projectid,
            removed = removed.map(|examples| examples.len()).unwrap_or(0),
            "deleted project training"
        );
        Ok(())
    }

    async fn rename_label(
        &self,
        projectid: &ProjectId,
        before: &str,
        after: &str,
    ) -> DomainResult<usize> {
        let mut training = self.training.write();
        let Some(examples) = training.get_mut(projectid) else {
            return Ok(0);
        };
        let mut renamed = 0;
        for example in examples.iter_mut().filter(|e| e.label == before) {
            example.label = after.to_string();
            renamed += 1;
        }
        Ok(renamed)
    }
}
