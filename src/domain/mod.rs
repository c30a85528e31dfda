//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod dataset;
mod patient;
mod risk;

pub use dataset::DatasetRow;
pub use patient::{Gender, PatientRecord, SmokerStatus, State};
pub use risk::{calculate_risk, PredictionResult, RiskAssessment, RiskLevel};
