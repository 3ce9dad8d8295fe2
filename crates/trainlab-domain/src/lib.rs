//! TrainLab domain layer
//!
//! Projects, their labelled training examples, the access rules guarding
//! them and the contracts persistence has to fulfil.

pub mod access;
pub mod errors;
pub mod pagination;
pub mod project;
pub mod repositories;
pub mod services;
pub mod store;
pub mod training;
pub mod value_objects;

pub use access::{AccessCheck, AccessGate, Caller, RequireSupervisor, Role, StudentScope, ValidUser};
pub use errors::{DomainError, DomainResult};
pub use pagination::{Page, PagingOptions, RangeRequest, RangeWindow};
pub use project::Project;
pub use services::TrainingService;
pub use store::{ExampleInput, TextTrainingStore, TrainingStore, TrainingStores};
pub use training::{LabelCounts, NewTextTraining, TextTraining};
pub use value_objects::{ProjectId, ProjectType, TrainingId};
