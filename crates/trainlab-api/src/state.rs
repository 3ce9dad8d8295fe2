//! Application state for the API server

use std::sync::Arc;
use std::time::{Duration, Instant};

use trainlab_domain::{AccessGate, TextTrainingStore, TrainingService, TrainingStores};
use trainlab_persistence::{InMemoryProjectRepository, InMemoryTextTrainingRepository};

use crate::{
    auth::{Authenticator, JwtAuthenticator},
    config::ApiConfig,
};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Training data operations
    pub training: Arc<TrainingService>,
    /// Identifies the caller of every training route
    pub authenticator: Arc<dyn Authenticator>,
    /// Checks guarding a student's own training data
    pub student_gate: Arc<AccessGate>,
    /// Checks guarding supervisor-only operations
    pub supervisor_gate: Arc<AccessGate>,
    /// Requests slower than this are logged as warnings
    pub slow_request_threshold: Duration,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the standard access gates
    pub fn new(training: TrainingService, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            training: Arc::new(training),
            authenticator,
            student_gate: Arc::new(AccessGate::student()),
            supervisor_gate: Arc::new(AccessGate::supervisor()),
            slow_request_threshold: Duration::from_millis(100),
            start_time: Instant::now(),
        }
    }

    /// State backed by in-memory repositories and JWT authentication
    pub fn in_memory(config: &ApiConfig) -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let training = Arc::new(InMemoryTextTrainingRepository::new());
        let stores = TrainingStores::new(
            TextTrainingStore::new(training).with_max_text_length(config.training.max_text_length),
        );

        Self::new(
            TrainingService::new(projects, stores),
            Arc::new(JwtAuthenticator::from_config(&config.auth)),
        )
        .with_slow_request_threshold(config.logging.slow_request_threshold())
    }

    /// Replace the access gates
    pub fn with_gates(mut self, student: AccessGate, supervisor: AccessGate) -> Self {
        self.student_gate = Arc::new(student);
        self.supervisor_gate = Arc::new(supervisor);
        self
    }

    /// Replace the slow-request warning threshold
    pub fn with_slow_request_threshold(mut self, threshold: Duration) -> Self {
        self.slow_request_threshold = threshold;
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
