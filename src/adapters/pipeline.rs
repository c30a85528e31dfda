//! Pipeline adapter: Implementation of Estimator over an exported artifact.
//!
//! The training side exports the fitted scaler + one-hot + linear-regression
//! pipeline as a JSON artifact. This module loads that artifact and replays
//! it: standardize the numeric features, add the one-hot coefficient for
//! each categorical value, add the intercept.
//!
//! The artifact's feature names and category spellings are exactly what the
//! pipeline was trained on; a record value with no encoding in the artifact
//! cannot be priced and surfaces as `EstimationFailed`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::PatientRecord;
use crate::ports::{Estimator, EstimatorError};

/// One standardized numeric term of the regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericTerm {
    /// Feature name (age, bmi, children)
    pub name: String,
    /// Regression coefficient on the standardized value
    pub coefficient: f64,
    /// Scaler mean
    pub mean: f64,
    /// Scaler standard deviation
    pub scale: f64,
}

/// One one-hot encoded categorical term of the regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalTerm {
    /// Feature name (gender, state, smoker)
    pub name: String,
    /// Coefficient per category value, keyed by dataset spelling
    pub coefficients: BTreeMap<String, f64>,
}

/// Regression pipeline parameters exported by the training side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPipeline {
    /// Regression intercept
    pub intercept: f64,
    /// Standardized numeric terms
    pub numeric: Vec<NumericTerm>,
    /// One-hot categorical terms
    pub categorical: Vec<CategoricalTerm>,
}

/// Estimator over an exported regression pipeline.
#[derive(Debug)]
pub struct PipelineEstimator {
    pipeline: ExportedPipeline,
}

impl PipelineEstimator {
    /// Load the pipeline artifact from a JSON file.
    ///
    /// One-time lifecycle step owned by the embedding application; the
    /// returned handle is reused read-only across predictions.
    ///
    /// # Errors
    /// Returns `EstimatorError::ModelUnavailable` if the artifact is missing
    /// or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EstimatorError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| {
            EstimatorError::ModelUnavailable(format!("{}: {e}", path.display()))
        })?;
        let pipeline: ExportedPipeline = serde_json::from_slice(&content).map_err(|e| {
            EstimatorError::ModelUnavailable(format!("Invalid artifact {}: {e}", path.display()))
        })?;

        let estimator = Self::from_exported(pipeline)?;
        tracing::info!(
            "Loaded pipeline artifact from {} ({} numeric, {} categorical terms)",
            path.display(),
            estimator.pipeline.numeric.len(),
            estimator.pipeline.categorical.len()
        );
        Ok(estimator)
    }

    /// Build an estimator from already-parsed pipeline parameters.
    ///
    /// # Errors
    /// Returns `EstimatorError::ModelUnavailable` if a scaler has zero
    /// standard deviation, which makes the artifact unusable.
    pub fn from_exported(pipeline: ExportedPipeline) -> Result<Self, EstimatorError> {
        for term in &pipeline.numeric {
            if term.scale == 0.0 || !term.scale.is_finite() {
                return Err(EstimatorError::ModelUnavailable(format!(
                    "Numeric term {:?} has invalid scale {}",
                    term.name, term.scale
                )));
            }
        }
        Ok(Self { pipeline })
    }

    fn numeric_value(record: &PatientRecord, name: &str) -> Result<f64, EstimatorError> {
        match name {
            "age" => Ok(f64::from(record.age)),
            "bmi" => Ok(record.bmi),
            "children" => Ok(f64::from(record.children)),
            other => Err(EstimatorError::EstimationFailed(format!(
                "Artifact references unknown numeric feature {other:?}"
            ))),
        }
    }

    fn categorical_value(record: &PatientRecord, name: &str) -> Result<String, EstimatorError> {
        match name {
            "gender" => Ok(record.gender.to_string()),
            "state" => Ok(record.state.to_string()),
            "smoker" => Ok(record.smoker.to_string()),
            other => Err(EstimatorError::EstimationFailed(format!(
                "Artifact references unknown categorical feature {other:?}"
            ))),
        }
    }
}

impl Estimator for PipelineEstimator {
    fn predict(&self, record: &PatientRecord) -> Result<f64, EstimatorError> {
        let mut estimate = self.pipeline.intercept;

        for term in &self.pipeline.numeric {
            let value = Self::numeric_value(record, &term.name)?;
            estimate += term.coefficient * (value - term.mean) / term.scale;
        }

        for term in &self.pipeline.categorical {
            let value = Self::categorical_value(record, &term.name)?;
            let coefficient = term.coefficients.get(&value).ok_or_else(|| {
                EstimatorError::EstimationFailed(format!(
                    "No encoding for {}={value:?} in artifact",
                    term.name
                ))
            })?;
            estimate += coefficient;
        }

        tracing::debug!("Pipeline estimate: ₦{estimate:.2}");
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::domain::{Gender, SmokerStatus, State};

    fn sample_pipeline() -> ExportedPipeline {
        ExportedPipeline {
            intercept: 50_000.0,
            numeric: vec![
                NumericTerm {
                    name: "age".into(),
                    coefficient: 20_000.0,
                    mean: 40.0,
                    scale: 10.0,
                },
                NumericTerm {
                    name: "bmi".into(),
                    coefficient: 8_000.0,
                    mean: 27.0,
                    scale: 4.0,
                },
                NumericTerm {
                    name: "children".into(),
                    coefficient: 2_000.0,
                    mean: 1.0,
                    scale: 1.0,
                },
            ],
            categorical: vec![
                CategoricalTerm {
                    name: "smoker".into(),
                    coefficients: BTreeMap::from([
                        ("Yes".to_string(), 90_000.0),
                        ("No".to_string(), 0.0),
                    ]),
                },
                CategoricalTerm {
                    name: "gender".into(),
                    coefficients: BTreeMap::from([
                        ("Male".to_string(), 1_500.0),
                        ("Female".to_string(), 0.0),
                    ]),
                },
                CategoricalTerm {
                    name: "state".into(),
                    coefficients: BTreeMap::from([
                        ("Lagos".to_string(), 12_000.0),
                        ("Kano".to_string(), -3_000.0),
                    ]),
                },
            ],
        }
    }

    fn sample_record() -> PatientRecord {
        PatientRecord {
            age: 50,
            gender: Gender::Male,
            state: State::Lagos,
            bmi: 31.0,
            children: 2,
            smoker: SmokerStatus::Yes,
        }
    }

    #[test]
    fn test_predict_replays_pipeline() {
        let estimator =
            PipelineEstimator::from_exported(sample_pipeline()).expect("Should build");
        let estimate = estimator.predict(&sample_record()).expect("Should predict");

        // 50000 + 20000*(50-40)/10 + 8000*(31-27)/4 + 2000*(2-1)/1
        //       + 90000 (smoker) + 1500 (male) + 12000 (Lagos)
        let expected = 50_000.0 + 20_000.0 + 8_000.0 + 2_000.0 + 90_000.0 + 1_500.0 + 12_000.0;
        assert!((estimate - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unencoded_category_fails_structured() {
        let estimator =
            PipelineEstimator::from_exported(sample_pipeline()).expect("Should build");
        let record = PatientRecord {
            state: State::Delta, // not in the artifact's state encoding
            ..sample_record()
        };

        let err = estimator.predict(&record).expect_err("Should fail");
        assert!(matches!(err, EstimatorError::EstimationFailed(_)));
    }

    #[test]
    fn test_zero_scale_artifact_rejected() {
        let mut pipeline = sample_pipeline();
        pipeline.numeric[0].scale = 0.0;

        let err = PipelineEstimator::from_exported(pipeline).expect_err("Should reject");
        assert!(matches!(err, EstimatorError::ModelUnavailable(_)));
    }

    #[test]
    fn test_missing_artifact_is_model_unavailable() {
        let err = PipelineEstimator::load("/nonexistent/pipeline.json").expect_err("Should fail");
        assert!(matches!(err, EstimatorError::ModelUnavailable(_)));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        let json = serde_json::to_string(&sample_pipeline()).expect("Should serialize");
        file.write_all(json.as_bytes()).expect("Should write");

        let estimator = PipelineEstimator::load(file.path()).expect("Should load");
        assert!(estimator.predict(&sample_record()).is_ok());
    }
}
