//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external artifacts:
//! - `csv`: the cleaned insurance dataset file
//! - `pipeline`: the exported regression pipeline artifact

pub mod csv;
pub mod pipeline;

// Re-export dataset error for lib.rs
pub use self::csv::DatasetError;
