//! Estimator port: Trait for the pretrained predictive model.
//!
//! This trait abstracts the regression pipeline artifact from the application
//! logic. The model is an opaque capability: given a structured patient
//! record, return one floating-point bill estimate.

use crate::domain::PatientRecord;

/// Errors that can occur when using the predictive model.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimatorError {
    /// The model artifact is missing or could not be loaded. Fatal for the
    /// session; surfaced before any prediction is attempted, not retried.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The underlying model raised during prediction. Callers must check for
    /// this before using the numeric result.
    #[error("Estimation failed: {0}")]
    EstimationFailed(String),
}

/// Trait for bill estimation.
///
/// Implementations wrap an externally trained pipeline. The handle is
/// initialized once by the caller and reused read-only across predictions;
/// no per-prediction caching happens behind this trait.
pub trait Estimator: Send + Sync {
    /// Estimate the hospital bill, in Naira, for a single patient record.
    ///
    /// # Errors
    /// Returns `EstimatorError::EstimationFailed` if the underlying model
    /// rejects the record or fails internally. Never panics on malformed
    /// input.
    fn predict(&self, record: &PatientRecord) -> Result<f64, EstimatorError>;
}
