//! Observed dataset rows.

use serde::{Deserialize, Serialize};

use super::{Gender, SmokerStatus, State};

/// One observation from the cleaned insurance dataset: patient attributes
/// plus the hospital bill actually charged.
///
/// The dataset is loaded once per session and treated as read-only; rows keep
/// their file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Age in years
    pub age: u32,

    /// Patient gender
    pub gender: Gender,

    /// State of residence
    pub state: State,

    /// Body Mass Index in kg/m²
    pub bmi: f64,

    /// Number of children / dependants
    pub children: u32,

    /// Smoking status
    pub smoker: SmokerStatus,

    /// Observed hospital bill in Naira
    pub hospital_bill: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_deserializes_from_dataset_spellings() {
        let json = serde_json::json!({
            "age": 42,
            "gender": "Male",
            "state": "Kano",
            "bmi": 27.5,
            "children": 3,
            "smoker": "Yes",
            "hospital_bill": 185_000.0,
        });
        let row: DatasetRow = serde_json::from_value(json).expect("Should deserialize");
        assert_eq!(row.age, 42);
        assert_eq!(row.state, State::Kano);
        assert!(row.smoker.is_smoker());
        assert!((row.hospital_bill - 185_000.0).abs() < f64::EPSILON);
    }
}
