use serde::ser::{Serialize, SerializeMap, Serializer};

/// Cleaned column data. Index `k` of every series is the same observation
/// row; columns keep the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedDataset {
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl CleanedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, replacing the series of an existing column with the
    /// same name in place.
    pub fn insert(&mut self, name: impl Into<String>, series: Vec<Option<f64>>) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = series,
            None => self.columns.push((name, series)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_slice())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn series(&self) -> impl Iterator<Item = &[Option<f64>]> {
        self.columns.iter().map(|(_, s)| s.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns.iter().map(|(n, s)| (n.as_str(), s.as_slice()))
    }

    /// Length of the longest series, i.e. the number of candidate rows.
    pub fn max_len(&self) -> usize {
        self.series().map(<[_]>::len).max().unwrap_or(0)
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Option<f64>>)> for CleanedDataset {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Option<f64>>)>>(iter: I) -> Self {
        let mut dataset = CleanedDataset::new();
        for (name, series) in iter {
            dataset.insert(name, series);
        }
        dataset
    }
}

// Serialized as an ordered map; missing values become `null`.
impl Serialize for CleanedDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, series) in &self.columns {
            map.serialize_entry(name, series)?;
        }
        map.end()
    }
}
