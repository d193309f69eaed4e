use tracing::{debug, trace};

use crate::core::types::DataPoint;

/// Resampled points allowed per input sample before time weighting gives up
/// and the plain trailing average is used.
pub const MAX_RESAMPLED_POINTS_PER_SAMPLE: usize = 32;

/// Trailing moving average over `period` samples.
///
/// With `time_weighted` the series is first resampled onto the interval
/// between its first two samples, so a long gap counts as several virtual
/// samples rather than one. The output keeps only the original sample
/// positions.
///
/// Falls back to the plain average when the first interval is not positive or
/// when densifying would exceed [`MAX_RESAMPLED_POINTS_PER_SAMPLE`] points per
/// input sample.
///
/// An empty series or a zero period yields an empty series; a single point is
/// returned unchanged.
#[must_use]
pub fn moving_average(series: &[DataPoint], period: usize, time_weighted: bool) -> Vec<DataPoint> {
    if period == 0 || series.is_empty() {
        return Vec::new();
    }
    if series.len() == 1 {
        return series.to_vec();
    }

    if time_weighted {
        if let Some(resampled) = ResampledSeries::build(series) {
            trace!(
                original = series.len(),
                resampled = resampled.points.len(),
                "time-weighted moving average"
            );
            let averaged = trailing_average(&resampled.points, period);
            return resampled
                .original_indexes
                .iter()
                .map(|&index| averaged[index])
                .collect();
        }
    }

    trailing_average(series, period)
}

fn trailing_average(series: &[DataPoint], period: usize) -> Vec<DataPoint> {
    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let window = &series[(index + 1).saturating_sub(period)..=index];
            let sum: f64 = window.iter().map(|sample| sample.y).sum();
            DataPoint::new(point.x, sum / window.len() as f64)
        })
        .collect()
}

/// A series densified onto a uniform virtual grid, remembering where each
/// original sample ended up.
struct ResampledSeries {
    points: Vec<DataPoint>,
    original_indexes: Vec<usize>,
}

impl ResampledSeries {
    /// Returns `None` when the base interval cannot anchor a grid or the grid
    /// would outgrow the resampling budget.
    fn build(series: &[DataPoint]) -> Option<Self> {
        let base_interval = series[1].x - series[0].x;
        if !base_interval.is_finite() || base_interval <= 0.0 {
            return None;
        }

        let budget = series.len().saturating_mul(MAX_RESAMPLED_POINTS_PER_SAMPLE);
        let synthetic_total: f64 = series
            .windows(2)
            .map(|pair| synthetic_count(pair[1].x - pair[0].x, base_interval))
            .sum();
        // NaN fails the comparison and falls back as well.
        let fits = synthetic_total + series.len() as f64 <= budget as f64;
        if !fits {
            debug!(
                points = series.len(),
                synthetic = synthetic_total,
                budget,
                "resampled grid too large, using plain moving average"
            );
            return None;
        }

        let mut points = Vec::with_capacity(synthetic_total as usize + series.len());
        let mut original_indexes = Vec::with_capacity(series.len());
        points.push(series[0]);
        original_indexes.push(0);

        for pair in series.windows(2) {
            let (previous, point) = (pair[0], pair[1]);
            let interval = point.x - previous.x;
            let ratio = interval / base_interval;
            let synthetic = synthetic_count(interval, base_interval) as usize;

            if synthetic == 0 {
                points.push(point);
                original_indexes.push(points.len() - 1);
                continue;
            }

            // The sample closing the gap only carries its share of the
            // elapsed interval; the virtual samples ramp towards that share.
            let anchor = points[points.len() - 1];
            let target = point.y / ratio;
            for step in 1..=synthetic {
                points.push(DataPoint::new(
                    anchor.x + step as f64 * base_interval,
                    anchor.y + ((target - anchor.y) * step as f64) / (synthetic + 1) as f64,
                ));
            }
            points.push(DataPoint::new(point.x, target));
            original_indexes.push(points.len() - 1);
        }

        Some(Self {
            points,
            original_indexes,
        })
    }
}

/// Virtual samples needed to fill `interval` on a grid of `base_interval`.
fn synthetic_count(interval: f64, base_interval: f64) -> f64 {
    if interval == base_interval {
        return 0.0;
    }
    ((interval / base_interval).floor() - 1.0).max(0.0)
}
