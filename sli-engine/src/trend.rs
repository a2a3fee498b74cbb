//! Ordinary least squares over a regularly indexed series.

/// The least-squares slope of `values` against their 0-based index.
///
/// Returns `None` when fewer than two points are available, since a trend is
/// undefined there. A degenerate denominator yields a slope of 0.0 rather
/// than dividing by zero.
pub(crate) fn ols_slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    // Indices are 0..n, so their mean has a closed form.
    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = values.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (index, value) in values.iter().enumerate() {
        let dx = index as f64 - mean_x;
        numerator += dx * (value - mean_y);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        Some(0.0)
    } else {
        Some(numerator / denominator)
    }
}
