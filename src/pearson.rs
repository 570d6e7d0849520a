use crate::dataset::CleanedDataset;
use ndarray::Array2;

// Index-aligned pairs where both sides are present.
fn complete_pairs(x: &[Option<f64>], y: &[Option<f64>]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect()
}

/// Number of rows a pair of series is correlated over after pairwise deletion.
pub fn paired_observations(x: &[Option<f64>], y: &[Option<f64>]) -> usize {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_some() && b.is_some())
        .count()
}

/// Sample Pearson correlation over the rows where both series are present.
///
/// Returns NaN when fewer than two pairs remain or either side is constant.
pub fn pearson_pair(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs = complete_pairs(x, y);
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for &(a, b) in &pairs {
        sum_x += a;
        sum_y += b;
    }
    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;

    let mut cov = 0.0;
    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    for &(a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        ss_x += dx * dx;
        ss_y += dy * dy;
    }

    let denom = n as f64 - 1.0;
    let std_x = (ss_x / denom).sqrt();
    let std_y = (ss_y / denom).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return f64::NAN;
    }
    (cov / denom) / (std_x * std_y)
}

/// Dense correlation matrix over every ordered pair of columns.
///
/// Each entry is computed on its own (`[i, j]` is not copied from `[j, i]`),
/// and undefined coefficients are stored as `0.0`.
pub fn correlation_matrix(data: &CleanedDataset) -> Array2<f64> {
    let columns: Vec<&[Option<f64>]> = data.series().collect();
    let size = columns.len();

    let mut matrix = Array2::<f64>::zeros((size, size));
    for i in 0..size {
        for j in 0..size {
            let corr = pearson_pair(columns[i], columns[j]);
            matrix[[i, j]] = if corr.is_nan() { 0.0 } else { corr };
        }
    }
    matrix
}

pub fn matrix(data: &CleanedDataset) -> Array2<f64> {
    correlation_matrix(data)
}

/// Pairwise sample sizes matching [`correlation_matrix`], used to tell a real
/// zero coefficient from an undefined one.
pub fn observation_counts(data: &CleanedDataset) -> Array2<usize> {
    let columns: Vec<&[Option<f64>]> = data.series().collect();
    let size = columns.len();
    Array2::from_shape_fn((size, size), |(i, j)| {
        paired_observations(columns[i], columns[j])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn perfect_linear_relationships() {
        let x = some(&[1.0, 2.0, 3.0, 4.0]);
        let up = some(&[2.0, 4.0, 6.0, 8.0]);
        let down = some(&[4.0, 3.0, 2.0, 1.0]);
        assert!(approx_eq(pearson_pair(&x, &up), 1.0, 1e-12));
        assert!(approx_eq(pearson_pair(&x, &down), -1.0, 1e-12));
    }

    #[test]
    fn known_coefficient() {
        let x = some(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = some(&[2.0, 1.0, 4.0, 3.0, 5.0]);
        // cov = 8/4, var_x = var_y = 10/4
        assert!(approx_eq(pearson_pair(&x, &y), 0.8, 1e-12));
    }

    #[test]
    fn skips_rows_missing_on_either_side() {
        let x = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let y = vec![Some(2.0), Some(4.0), None, Some(8.0)];
        assert_eq!(paired_observations(&x, &y), 2);
        assert!(approx_eq(pearson_pair(&x, &y), 1.0, 1e-12));
    }

    #[test]
    fn fewer_than_two_pairs_is_undefined() {
        let x = vec![Some(1.0), None];
        let y = vec![Some(2.0), Some(3.0)];
        assert!(pearson_pair(&x, &y).is_nan());
        assert!(pearson_pair(&[], &[]).is_nan());
    }

    #[test]
    fn constant_series_is_undefined() {
        let x = some(&[5.0, 5.0, 5.0]);
        let y = some(&[1.0, 2.0, 3.0]);
        assert!(pearson_pair(&x, &y).is_nan());
        assert!(pearson_pair(&x, &x).is_nan());
    }

    #[test]
    fn unequal_lengths_use_the_shorter_bound() {
        let x = some(&[1.0, 2.0, 3.0]);
        let y = some(&[3.0, 2.0, 1.0, 100.0, -7.0]);
        assert_eq!(paired_observations(&x, &y), 3);
        assert!(approx_eq(pearson_pair(&x, &y), -1.0, 1e-12));
    }

    #[test]
    fn matrix_replaces_undefined_with_zero() {
        let data: CleanedDataset = vec![
            ("x", some(&[1.0, 2.0, 3.0])),
            ("flat", some(&[2.0, 2.0, 2.0])),
        ]
        .into_iter()
        .collect();
        let corr = correlation_matrix(&data);
        assert_eq!(corr.dim(), (2, 2));
        assert!(approx_eq(corr[[0, 0]], 1.0, 1e-12));
        assert_eq!(corr[[0, 1]], 0.0);
        assert_eq!(corr[[1, 0]], 0.0);
        assert_eq!(corr[[1, 1]], 0.0);

        let counts = observation_counts(&data);
        assert_eq!(counts[[0, 1]], 3);
    }
}
