use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::{RegressionModel, StudentRecord};

/// Integer x domain sampled when rendering the fitted line.
pub const TREND_SAMPLE_DOMAIN: RangeInclusive<i32> = 0..=14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient data to fit a consumption trend")]
pub struct InsufficientData;

pub fn fit_consumption_trend(
    records: &[StudentRecord],
) -> Result<RegressionModel, InsufficientData> {
    fit_line(
        records
            .iter()
            .map(|r| (f64::from(r.combined_consumption()), f64::from(r.final_grade))),
    )
}

/// Closed-form ordinary least squares over (x, y) pairs. An empty input or
/// zero variance in x yields `InsufficientData` instead of a division by zero.
pub fn fit_line(
    points: impl IntoIterator<Item = (f64, f64)>,
) -> Result<RegressionModel, InsufficientData> {
    let mut n = 0.0;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);

    for (x, y) in points {
        n += 1.0;
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if n == 0.0 || denom.abs() < f64::EPSILON {
        return Err(InsufficientData);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(RegressionModel { slope, intercept })
}

impl RegressionModel {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Lazily samples the fitted line over `TREND_SAMPLE_DOMAIN` for overlay
    /// on a consumption scatter.
    pub fn sample_points(self) -> impl Iterator<Item = (f64, f64)> {
        TREND_SAMPLE_DOMAIN.map(move |x| {
            let x = f64::from(x);
            (x, self.predict(x))
        })
    }
}
