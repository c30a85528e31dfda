//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (the pretrained model
//! artifact, the dataset file).

mod dataset_source;
mod estimator;

pub use dataset_source::DatasetSource;
pub use estimator::{Estimator, EstimatorError};
