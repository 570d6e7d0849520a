use ndarray::Array2;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

use crate::clean::clean_series;
use crate::dataset::CleanedDataset;
use crate::describe::{describe, CorrelationStrength, Language};
use crate::error::CorrelationError;
use crate::pearson::correlation_matrix;
use crate::sufficiency::{complete_rows, has_enough_data};

/// Output of [`calculate`]: the matrix, the column order it was built in,
/// and the cleaned data behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    pub matrix: Array2<f64>,
    pub column_names: Vec<String>,
    pub data: CleanedDataset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairDescription {
    pub first: String,
    pub second: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    pub label: &'static str,
}

impl CorrelationResult {
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    pub fn coefficient(&self, first: &str, second: &str) -> Option<f64> {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;
        Some(self.matrix[[i, j]])
    }

    /// Every distinct pair above the diagonal, in column order.
    pub fn describe_pairs(&self, language: Language) -> Vec<PairDescription> {
        let size = self.column_names.len();
        let mut pairs = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 0..size {
            for j in i + 1..size {
                let coefficient = self.matrix[[i, j]];
                let strength = describe(coefficient);
                pairs.push(PairDescription {
                    first: self.column_names[i].clone(),
                    second: self.column_names[j].clone(),
                    coefficient,
                    strength,
                    label: strength.label(language),
                });
            }
        }
        pairs
    }
}

impl Serialize for CorrelationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<f64>> = self.matrix.rows().into_iter().map(|r| r.to_vec()).collect();
        let mut state = serializer.serialize_struct("CorrelationResult", 3)?;
        state.serialize_field("matrix", &rows)?;
        state.serialize_field("columnNames", &self.column_names)?;
        state.serialize_field("dataDict", &self.data)?;
        state.end()
    }
}

/// Gate and matrix for data that is already numeric.
pub fn calculate_cleaned(data: CleanedDataset) -> Result<CorrelationResult, CorrelationError> {
    if !has_enough_data(&data) {
        log::warn!(
            "insufficient data: {} complete rows across {} columns",
            complete_rows(&data),
            data.len()
        );
        return Err(CorrelationError::InsufficientData);
    }

    let matrix = correlation_matrix(&data);
    log::debug!("computed {}x{} correlation matrix", matrix.nrows(), matrix.ncols());

    Ok(CorrelationResult {
        matrix,
        column_names: data.column_names(),
        data,
    })
}

/// Builds the correlation matrix for a dataset of named raw series.
///
/// Entries whose value is not an array are skipped. Every cell is cleaned
/// (see [`clean_value`](crate::clean::clean_value)) and the dataset must have
/// at least two rows with a value in every column.
pub fn calculate(raw: &Map<String, Value>) -> Result<CorrelationResult, CorrelationError> {
    let mut data = CleanedDataset::new();
    for (name, value) in raw {
        match value {
            Value::Array(series) => data.insert(name.as_str(), clean_series(series)),
            _ => log::debug!("skipping non-array entry {name:?}"),
        }
    }
    log::debug!("cleaned {} of {} entries", data.len(), raw.len());

    calculate_cleaned(data)
}

/// Like [`calculate`], for any JSON value. Anything but an object has no
/// columns and therefore fails the gate.
pub fn calculate_json(raw: &Value) -> Result<CorrelationResult, CorrelationError> {
    match raw {
        Value::Object(map) => calculate(map),
        _ => calculate(&Map::new()),
    }
}

/// Stateless handle over [`calculate`] and [`describe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationMatrix;

impl CorrelationMatrix {
    pub fn new() -> Self {
        CorrelationMatrix
    }

    pub fn calculate(
        &self,
        raw: &Map<String, Value>,
    ) -> Result<CorrelationResult, CorrelationError> {
        calculate(raw)
    }

    pub fn describe(&self, value: f64) -> CorrelationStrength {
        describe(value)
    }
}
