//! Dataset source port: Trait for loading the observed dataset.
//!
//! This trait abstracts the tabular backing file (CSV) from the application
//! logic. The dataset is loaded once per session and treated as read-only.

use crate::domain::DatasetRow;

/// Trait for dataset access.
pub trait DatasetSource: Send + Sync {
    /// Error type for load operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every row of the dataset, in file order.
    ///
    /// # Errors
    /// Returns error if the backing file is missing or a row is malformed.
    fn load(&self) -> Result<Vec<DatasetRow>, Self::Error>;
}
