//! Prediction service: Orchestrates bill estimation for a single patient.
//!
//! This service coordinates:
//! - Boundary validation of the form record
//! - The regression pipeline call
//! - Heuristic risk scoring
//!
//! The result is a plain value handed back to the presentation layer; no
//! session-global mutable state is involved.

use std::sync::Arc;

use crate::domain::{calculate_risk, PatientRecord, PredictionResult};
use crate::ports::Estimator;
use crate::MedicostError;

/// Service for running bill predictions.
///
/// Holds the already-initialized model handle for the session and reuses it
/// read-only across calls. Model loading is the caller's one-time lifecycle
/// step; a handle that failed to load never reaches this service.
pub struct PredictionService<E>
where
    E: Estimator,
{
    estimator: Arc<E>,
}

impl<E> PredictionService<E>
where
    E: Estimator,
{
    /// Create a new prediction service over a loaded model handle.
    pub fn new(estimator: Arc<E>) -> Self {
        Self { estimator }
    }

    /// Estimate the bill and risk tier for one patient record.
    ///
    /// Performs the full pipeline:
    /// 1. Validate the record against the form's value domains
    /// 2. Ask the model for a bill estimate
    /// 3. Score the heuristic risk tier
    ///
    /// # Errors
    /// Returns `MedicostError::Validation` for an out-of-domain record and
    /// `MedicostError::Estimator` if the underlying model fails; never an
    /// unstructured panic.
    pub fn predict(&self, record: PatientRecord) -> Result<PredictionResult, MedicostError> {
        record
            .validate()
            .map_err(|errors| MedicostError::Validation(errors.join("; ")))?;

        tracing::debug!("Requesting estimate for record: {record:?}");
        let estimated_bill = self.estimator.predict(&record)?;

        let risk = calculate_risk(record.age, record.bmi, record.smoker);

        tracing::info!(
            "Prediction complete: estimate=₦{:.2}, risk={} (score {})",
            estimated_bill,
            risk.level,
            risk.score
        );

        Ok(PredictionResult::new(estimated_bill, risk, record))
    }
}
