//! Pairwise Pearson correlation matrices over named series with missing data.
//!
//! Raw cells are cleaned into `Option<f64>`, the dataset must have at least
//! two fully observed rows, and each pair of columns is then correlated over
//! the rows where both are present.

pub mod clean;
pub mod dataset;
pub mod describe;
pub mod error;
pub mod matrix;
pub mod pearson;
pub mod sufficiency;

pub use clean::{clean_series, clean_value};
pub use dataset::CleanedDataset;
pub use describe::{describe, describe_label, CorrelationStrength, Language};
pub use error::CorrelationError;
pub use matrix::{
    calculate, calculate_cleaned, calculate_json, CorrelationMatrix, CorrelationResult,
    PairDescription,
};
pub use sufficiency::has_enough_data;
