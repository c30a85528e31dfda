//! Risk scoring and prediction result types.
//!
//! The risk tier is a coarse additive point system over age, BMI and smoking
//! status, displayed alongside the regression estimate.

use serde::{Deserialize, Serialize};

use super::{PatientRecord, SmokerStatus};

/// Ordinal risk tier derived from the additive point score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk profile
    Low,
    /// Medium risk, premium review recommended
    Medium,
    /// High risk, cost-heavy profile
    High,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant cost drivers",
            Self::Medium => "Medium risk - Premium review recommended",
            Self::High => "High risk - Cost-heavy profile, adjust tier early",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Risk tier plus the raw point score it was derived from.
///
/// A pure function of (age, bmi, smoker): identical inputs always yield an
/// identical assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk classification
    pub level: RiskLevel,

    /// Additive point score (0-7)
    pub score: u8,
}

/// Compute the risk assessment for a patient profile.
///
/// Scoring:
/// - Age: under 30 adds 0, 30-50 adds 1, over 50 adds 2
/// - BMI: under 25 adds 0, 25-30 adds 1, over 30 adds 2
/// - Smoker: adds 3
///
/// Tiers: score 0-2 is Low, 3-4 is Medium, 5-7 is High.
#[must_use]
pub fn calculate_risk(age: u32, bmi: f64, smoker: SmokerStatus) -> RiskAssessment {
    let age_points: u8 = if age < 30 {
        0
    } else if age <= 50 {
        1
    } else {
        2
    };

    let bmi_points: u8 = if bmi < 25.0 {
        0
    } else if bmi <= 30.0 {
        1
    } else {
        2
    };

    let smoker_points: u8 = if smoker.is_smoker() { 3 } else { 0 };

    let score = age_points + bmi_points + smoker_points;

    let level = if score <= 2 {
        RiskLevel::Low
    } else if score <= 4 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    RiskAssessment { level, score }
}

/// Outcome of a single prediction request.
///
/// Session-scoped value returned to the presentation layer; never written to
/// durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated hospital bill in Naira
    pub estimated_bill: f64,

    /// Heuristic risk assessment for the same profile
    pub risk: RiskAssessment,

    /// The record the estimate was computed for
    pub record: PatientRecord,

    /// Timestamp of the prediction
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PredictionResult {
    /// Create a new prediction result stamped with the current time.
    #[must_use]
    pub fn new(estimated_bill: f64, risk: RiskAssessment, record: PatientRecord) -> Self {
        Self {
            estimated_bill,
            risk,
            record,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_risk_young_non_smoker() {
        let risk = calculate_risk(25, 22.0, SmokerStatus::No);
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_high_risk_older_smoker() {
        let risk = calculate_risk(55, 32.0, SmokerStatus::Yes);
        assert_eq!(risk.score, 7);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn test_band_boundaries_stay_low() {
        // age 30-50 gives 1, bmi 25-30 gives 1, total 2 is still Low
        let risk = calculate_risk(35, 27.0, SmokerStatus::No);
        assert_eq!(risk.score, 2);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_age_points_monotonic() {
        let mut last = 0;
        for age in [20, 29, 30, 45, 50, 51, 80] {
            let score = calculate_risk(age, 20.0, SmokerStatus::No).score;
            assert!(score >= last, "age points decreased at age {age}");
            last = score;
        }
    }

    #[test]
    fn test_smoking_adds_exactly_three_points() {
        for (age, bmi) in [(25, 22.0), (35, 27.0), (55, 32.0)] {
            let no = calculate_risk(age, bmi, SmokerStatus::No);
            let yes = calculate_risk(age, bmi, SmokerStatus::Yes);
            assert_eq!(yes.score, no.score + 3);
        }

        // Smoking alone can move the tier
        assert_eq!(calculate_risk(25, 22.0, SmokerStatus::No).level, RiskLevel::Low);
        assert_eq!(
            calculate_risk(25, 22.0, SmokerStatus::Yes).level,
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_tier_thresholds() {
        // score 3 and 4 are Medium, 5 is High
        assert_eq!(calculate_risk(55, 24.0, SmokerStatus::No).level, RiskLevel::Low);
        assert_eq!(calculate_risk(55, 27.0, SmokerStatus::No).level, RiskLevel::Medium);
        assert_eq!(calculate_risk(55, 32.0, SmokerStatus::No).level, RiskLevel::Medium);
        assert_eq!(calculate_risk(29, 27.0, SmokerStatus::Yes).level, RiskLevel::Medium);
        assert_eq!(calculate_risk(35, 27.0, SmokerStatus::Yes).level, RiskLevel::High);
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_risk(40, 28.0, SmokerStatus::Yes);
        let b = calculate_risk(40, 28.0, SmokerStatus::Yes);
        assert_eq!(a, b);
    }
}
