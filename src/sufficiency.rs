use crate::dataset::CleanedDataset;

/// Complete rows required before any coefficient is computed.
pub const MIN_COMPLETE_ROWS: usize = 2;

fn row_is_complete(data: &CleanedDataset, row: usize) -> bool {
    // Past the end of a shorter series counts as missing.
    data.series()
        .all(|series| matches!(series.get(row), Some(Some(_))))
}

/// True once `MIN_COMPLETE_ROWS` rows with a value in every column are seen.
/// An empty dataset never has enough data.
pub fn has_enough_data(data: &CleanedDataset) -> bool {
    if data.is_empty() {
        return false;
    }

    let mut complete = 0;
    for row in 0..data.max_len() {
        if row_is_complete(data, row) {
            complete += 1;
        }
        if complete >= MIN_COMPLETE_ROWS {
            return true;
        }
    }
    false
}

/// Number of rows with a value in every column. Zero for an empty dataset.
pub fn complete_rows(data: &CleanedDataset) -> usize {
    if data.is_empty() {
        return 0;
    }
    (0..data.max_len())
        .filter(|&row| row_is_complete(data, row))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(columns: Vec<(&str, Vec<Option<f64>>)>) -> CleanedDataset {
        columns.into_iter().collect()
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        assert!(!has_enough_data(&CleanedDataset::new()));
        assert_eq!(complete_rows(&CleanedDataset::new()), 0);
    }

    #[test]
    fn one_complete_row_is_insufficient() {
        let data = dataset(vec![
            ("a", vec![Some(1.0), None, Some(3.0)]),
            ("b", vec![Some(1.0), Some(2.0), None]),
        ]);
        assert_eq!(complete_rows(&data), 1);
        assert!(!has_enough_data(&data));
    }

    #[test]
    fn two_complete_rows_are_enough() {
        let data = dataset(vec![
            ("a", vec![Some(1.0), None, Some(3.0)]),
            ("b", vec![Some(1.0), Some(2.0), Some(4.0)]),
        ]);
        assert_eq!(complete_rows(&data), 2);
        assert!(has_enough_data(&data));
    }

    #[test]
    fn shorter_series_are_missing_past_their_end() {
        let data = dataset(vec![
            ("a", vec![Some(1.0)]),
            ("b", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ]);
        assert_eq!(complete_rows(&data), 1);
        assert!(!has_enough_data(&data));
    }

    #[test]
    fn adding_complete_rows_keeps_sufficiency() {
        let mut a = vec![Some(1.0), Some(2.0)];
        let mut b = vec![Some(3.0), Some(4.0)];
        assert!(has_enough_data(&dataset(vec![("a", a.clone()), ("b", b.clone())])));
        a.push(Some(5.0));
        b.push(Some(6.0));
        assert!(has_enough_data(&dataset(vec![("a", a), ("b", b)])));
    }
}
