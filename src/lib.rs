//! # MediCost
//!
//! Analytics and billing-estimation core for Nigerian medical-insurance data.
//!
//! This crate provides:
//! - Dataset filtering and descriptive aggregation over the insurance dataset
//! - A heuristic risk tier derived from age, BMI and smoking status
//! - An adapter over a pretrained regression pipeline that estimates
//!   hospital bills in Naira
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (PatientRecord, DatasetRow, RiskAssessment)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (CSV dataset, exported pipeline)
//! - `application`: Use cases orchestrating domain and ports
//!
//! The presentation layer (filters, charts, forms) is owned by the embedding
//! application; this crate only computes the values it renders.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use domain::{PatientRecord, RiskAssessment, RiskLevel};

/// Result type for MediCost operations
pub type Result<T> = std::result::Result<T, MedicostError>;

/// Main error type for MediCost
#[derive(Debug, thiserror::Error)]
pub enum MedicostError {
    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Dataset operation failed: {0}")]
    Dataset(#[from] adapters::DatasetError),

    #[error("Estimation failed: {0}")]
    Estimator(#[from] ports::EstimatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
