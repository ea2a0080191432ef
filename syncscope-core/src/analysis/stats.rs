//! Small numeric helpers shared by the engine and the plot series.

/// Below this the regression denominator is treated as zero.
const DEGENERATE_DENOMINATOR: f64 = 1e-10;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation; 0 for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

pub fn max_abs_deviation(values: &[f64], center: f64) -> f64 {
    values
        .iter()
        .map(|v| (v - center).abs())
        .fold(0.0, f64::max)
}

/// Ordinary least-squares fit `y = slope * x + intercept`.
///
/// `None` for fewer than two points or a degenerate denominator
/// (e.g. every `x` equal).
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let (xs, ys) = (&xs[..n], &ys[..n]);
    let n_f = n as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();

    let denominator = n_f * sum_x2 - sum_x * sum_x;
    if denominator.abs() < DEGENERATE_DENOMINATOR {
        return None;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;
    Some((slope, intercept))
}
