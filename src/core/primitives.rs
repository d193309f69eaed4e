use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Rounds a pixel coordinate to one decimal place, the precision every path
/// anchor is emitted with.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds half-up towards positive infinity; used for curve control points.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Snaps a pixel position onto the centre of a device pixel so one-pixel
/// strokes render crisp.
#[must_use]
pub fn snap_to_pixel_center(value: f64) -> f64 {
    value.floor() + 0.5
}
