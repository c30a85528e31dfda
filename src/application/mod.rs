//! Application layer: Use cases orchestrating domain and ports.

pub mod analytics;
pub mod prediction;

pub use analytics::{
    age_histogram, bill_histogram, correlation_matrix, filter, histogram, mean_bill_by_smoker,
    mean_bill_by_state, summarize, AnalyticsService, CorrelationMatrix, FilterCriteria,
    HistogramBin, Summary,
};
pub use prediction::PredictionService;
