//! Analytics service: Dataset filtering and descriptive aggregation.
//!
//! Everything the dashboard renders — KPI cards, group-by charts, the
//! correlation heatmap — is computed here over an in-memory, read-only copy
//! of the dataset. All aggregations resolve empty inputs to defined zero
//! sentinels instead of failing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::adapters::DatasetError;
use crate::domain::{DatasetRow, SmokerStatus, State};
use crate::ports::DatasetSource;
use crate::MedicostError;

/// Conjunction of inclusion predicates over the dataset.
///
/// Set-valued criteria may be empty, in which case no row matches — callers
/// pre-populate defaults from the dataset's observed values via
/// [`FilterCriteria::admitting_all`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Ages to admit
    pub ages: BTreeSet<u32>,

    /// Inclusive BMI lower bound
    pub bmi_min: f64,

    /// Inclusive BMI upper bound
    pub bmi_max: f64,

    /// Smoking statuses to admit
    pub smokers: BTreeSet<SmokerStatus>,

    /// States to admit
    pub states: BTreeSet<State>,
}

impl FilterCriteria {
    /// Build criteria that admit every row of the given dataset.
    ///
    /// Sets are the observed distinct values and the BMI bounds are the
    /// observed min/max, so the defaults track the dataset rather than
    /// hardcoded ranges. For an empty dataset everything is empty/zero.
    #[must_use]
    pub fn admitting_all(rows: &[DatasetRow]) -> Self {
        let mut bmi_min = f64::INFINITY;
        let mut bmi_max = f64::NEG_INFINITY;
        let mut ages = BTreeSet::new();
        let mut smokers = BTreeSet::new();
        let mut states = BTreeSet::new();

        for row in rows {
            ages.insert(row.age);
            smokers.insert(row.smoker);
            states.insert(row.state);
            bmi_min = bmi_min.min(row.bmi);
            bmi_max = bmi_max.max(row.bmi);
        }

        if rows.is_empty() {
            bmi_min = 0.0;
            bmi_max = 0.0;
        }

        Self {
            ages,
            bmi_min,
            bmi_max,
            smokers,
            states,
        }
    }

    /// Whether a row satisfies every predicate.
    #[must_use]
    pub fn matches(&self, row: &DatasetRow) -> bool {
        self.ages.contains(&row.age)
            && row.bmi >= self.bmi_min
            && row.bmi <= self.bmi_max
            && self.smokers.contains(&row.smoker)
            && self.states.contains(&row.state)
    }
}

/// Select the subset of rows satisfying the criteria, in original order.
///
/// Pure over its inputs; the dataset is never mutated.
#[must_use]
pub fn filter(rows: &[DatasetRow], criteria: &FilterCriteria) -> Vec<DatasetRow> {
    rows.iter().filter(|row| criteria.matches(row)).cloned().collect()
}

/// Descriptive statistics over a (possibly filtered) subset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Mean hospital bill in Naira
    pub avg_bill: f64,

    /// Mean age in years
    pub avg_age: f64,

    /// Mean BMI in kg/m²
    pub avg_bmi: f64,

    /// Share of smokers, 0-100
    pub smoker_percentage: f64,
}

/// Compute the KPI summary for a subset of rows.
///
/// An empty subset yields the all-zero summary; this never divides by zero.
/// The smoker share is counted by the `Yes` value itself, never by position
/// in a frequency breakdown, so it is stable regardless of category order.
#[must_use]
pub fn summarize(rows: &[DatasetRow]) -> Summary {
    if rows.is_empty() {
        return Summary::default();
    }

    let count = rows.len() as f64;
    let mut bill_sum = 0.0;
    let mut age_sum = 0.0;
    let mut bmi_sum = 0.0;
    let mut smokers = 0usize;

    for row in rows {
        bill_sum += row.hospital_bill;
        age_sum += f64::from(row.age);
        bmi_sum += row.bmi;
        if row.smoker.is_smoker() {
            smokers += 1;
        }
    }

    Summary {
        avg_bill: bill_sum / count,
        avg_age: age_sum / count,
        avg_bmi: bmi_sum / count,
        smoker_percentage: 100.0 * smokers as f64 / count,
    }
}

fn mean_bill_by<K: Ord>(
    rows: &[DatasetRow],
    key: impl Fn(&DatasetRow) -> K,
) -> std::collections::BTreeMap<K, f64> {
    let mut sums: std::collections::BTreeMap<K, (f64, usize)> = std::collections::BTreeMap::new();
    for row in rows {
        let entry = sums.entry(key(row)).or_insert((0.0, 0));
        entry.0 += row.hospital_bill;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Mean hospital bill per smoking status, over observed statuses only.
#[must_use]
pub fn mean_bill_by_smoker(rows: &[DatasetRow]) -> std::collections::BTreeMap<SmokerStatus, f64> {
    mean_bill_by(rows, |row| row.smoker)
}

/// Mean hospital bill per state, over observed states only.
#[must_use]
pub fn mean_bill_by_state(rows: &[DatasetRow]) -> std::collections::BTreeMap<State, f64> {
    mean_bill_by(rows, |row| row.state)
}

/// One equal-width bin of the bill distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge (inclusive for the last bin)
    pub upper: f64,
    /// Number of rows falling in the bin
    pub count: usize,
}

/// Bin a numeric column into `bins` equal-width buckets.
///
/// Empty input or zero bins yields no bins. When every value is identical
/// the single degenerate bin holds all rows.
#[must_use]
pub fn histogram(
    rows: &[DatasetRow],
    bins: usize,
    value: impl Fn(&DatasetRow) -> f64,
) -> Vec<HistogramBin> {
    if rows.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        min = min.min(value(row));
        max = max.max(value(row));
    }

    if max == min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: rows.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for row in rows {
        let index = ((value(row) - min) / width) as usize;
        counts[index.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Bin the hospital-bill column for the bill distribution chart.
#[must_use]
pub fn bill_histogram(rows: &[DatasetRow], bins: usize) -> Vec<HistogramBin> {
    histogram(rows, bins, |row| row.hospital_bill)
}

/// Bin the age column for the age distribution chart.
#[must_use]
pub fn age_histogram(rows: &[DatasetRow], bins: usize) -> Vec<HistogramBin> {
    histogram(rows, bins, |row| f64::from(row.age))
}

/// Numeric columns of the dataset, in matrix order.
pub const NUMERIC_COLUMNS: [&str; 4] = ["age", "bmi", "children", "hospital_bill"];

/// Pearson correlations between the numeric dataset columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// values[i][j] is the correlation between NUMERIC_COLUMNS[i] and [j]
    pub values: [[f64; 4]; 4],
}

impl CorrelationMatrix {
    /// Column labels for the value indices, in matrix order.
    #[must_use]
    pub fn columns(&self) -> [&'static str; 4] {
        NUMERIC_COLUMNS
    }
}

/// Compute the correlation matrix over age, bmi, children and hospital_bill.
///
/// A zero-variance column correlates 0.0 with every other column instead of
/// producing NaN; the diagonal is always 1.0.
#[must_use]
pub fn correlation_matrix(rows: &[DatasetRow]) -> CorrelationMatrix {
    let n = rows.len();
    let mut values = [[0.0; 4]; 4];
    for (i, row) in values.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    if n == 0 {
        return CorrelationMatrix { values };
    }

    let columns: Vec<[f64; 4]> = rows
        .iter()
        .map(|row| {
            [
                f64::from(row.age),
                row.bmi,
                f64::from(row.children),
                row.hospital_bill,
            ]
        })
        .collect();

    let count = n as f64;
    let mut means = [0.0; 4];
    for sample in &columns {
        for (mean, value) in means.iter_mut().zip(sample) {
            *mean += value / count;
        }
    }

    for i in 0..4 {
        for j in (i + 1)..4 {
            let mut cov = 0.0;
            let mut var_i = 0.0;
            let mut var_j = 0.0;
            for sample in &columns {
                let di = sample[i] - means[i];
                let dj = sample[j] - means[j];
                cov += di * dj;
                var_i += di * di;
                var_j += dj * dj;
            }

            let denom = (var_i * var_j).sqrt();
            let r = if denom == 0.0 { 0.0 } else { cov / denom };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { values }
}

/// Session-scoped analytics over the loaded dataset.
///
/// Holds the read-only rows for the lifetime of a session and answers the
/// dashboard's filter/summary queries.
pub struct AnalyticsService {
    rows: Vec<DatasetRow>,
}

impl AnalyticsService {
    /// Load the dataset once from a source and keep it for the session.
    ///
    /// # Errors
    /// Returns error if the source fails to load.
    pub fn from_source<S>(source: &S) -> Result<Self, MedicostError>
    where
        S: DatasetSource,
        S::Error: Into<DatasetError>,
    {
        let rows = source.load().map_err(|e| MedicostError::Dataset(e.into()))?;
        tracing::info!("Analytics session over {} rows", rows.len());
        Ok(Self { rows })
    }

    /// Build a session over rows already in memory.
    #[must_use]
    pub fn from_rows(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// The full dataset, in file order.
    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Criteria admitting every row, derived from observed values.
    #[must_use]
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::admitting_all(&self.rows)
    }

    /// The subset matching the criteria, in original order.
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<DatasetRow> {
        filter(&self.rows, criteria)
    }

    /// KPI summary of the subset matching the criteria.
    #[must_use]
    pub fn summary(&self, criteria: &FilterCriteria) -> Summary {
        summarize(&self.filtered(criteria))
    }
}
