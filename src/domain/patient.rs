//! Patient input types for bill estimation.
//!
//! Field names and enum spellings match the cleaned Nigerian medical-insurance
//! dataset the regression pipeline was trained on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient gender as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(format!("Unknown gender {other:?}, expected Male or Female")),
        }
    }
}

/// Smoking status. The dataset and the trained pipeline use the literal
/// strings "Yes" and "No"; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SmokerStatus {
    Yes,
    No,
}

impl SmokerStatus {
    /// Whether this status counts as a smoker.
    #[must_use]
    pub fn is_smoker(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for SmokerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl FromStr for SmokerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(format!("Unknown smoker status {other:?}, expected Yes or No")),
        }
    }
}

/// State of residence.
///
/// The ten states present in the cleaned dataset, spelled exactly as the
/// pipeline artifact encodes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum State {
    Lagos,
    Abuja,
    Rivers,
    Kano,
    Kaduna,
    Oyo,
    Enugu,
    Anambra,
    Edo,
    Delta,
}

impl State {
    /// All states, in form-display order.
    pub const ALL: [State; 10] = [
        State::Lagos,
        State::Abuja,
        State::Rivers,
        State::Kano,
        State::Kaduna,
        State::Oyo,
        State::Enugu,
        State::Anambra,
        State::Edo,
        State::Delta,
    ];

    /// Dataset spelling of this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lagos => "Lagos",
            Self::Abuja => "Abuja",
            Self::Rivers => "Rivers",
            Self::Kano => "Kano",
            Self::Kaduna => "Kaduna",
            Self::Oyo => "Oyo",
            Self::Enugu => "Enugu",
            Self::Anambra => "Anambra",
            Self::Edo => "Edo",
            Self::Delta => "Delta",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("Unknown state {s:?}"))
    }
}

/// A single patient's attributes, as collected by the prediction form.
///
/// Immutable once constructed; built fresh per prediction request and never
/// persisted. Field names match what the pipeline artifact was trained on:
/// age, gender, state, bmi, children, smoker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years (form range 20-85)
    pub age: u32,

    /// Patient gender
    pub gender: Gender,

    /// State of residence
    pub state: State,

    /// Body Mass Index in kg/m² (form range 15.0-50.0)
    pub bmi: f64,

    /// Number of children / dependants (form range 0-10)
    pub children: u32,

    /// Smoking status
    pub smoker: SmokerStatus,
}

impl PatientRecord {
    /// Form bounds for age in years.
    pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 20..=85;

    /// Form bounds for BMI in kg/m².
    pub const BMI_RANGE: std::ops::RangeInclusive<f64> = 15.0..=50.0;

    /// Form bound for number of children.
    pub const MAX_CHILDREN: u32 = 10;

    /// Validate that all fields are within the form's expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !Self::AGE_RANGE.contains(&self.age) {
            errors.push(format!(
                "Age {} out of range [{}, {}]",
                self.age,
                Self::AGE_RANGE.start(),
                Self::AGE_RANGE.end()
            ));
        }
        if !Self::BMI_RANGE.contains(&self.bmi) {
            errors.push(format!(
                "BMI {} out of range [{}, {}]",
                self.bmi,
                Self::BMI_RANGE.start(),
                Self::BMI_RANGE.end()
            ));
        }
        if self.children > Self::MAX_CHILDREN {
            errors.push(format!(
                "Children {} above maximum {}",
                self.children,
                Self::MAX_CHILDREN
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
