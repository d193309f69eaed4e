use serde::{Deserialize, Serialize};

use crate::core::calc::PixelCalc;
use crate::core::primitives::snap_to_pixel_center;

/// Default number of value ticks requested from [`tick_size`].
pub const DEFAULT_VALUE_TICK_TARGET: usize = 5;
/// Minor ticks drawn between two major value ticks (major included).
pub const VALUE_MINOR_TICKS_PER_MAJOR: usize = 5;
/// Upper bound on value ticks; larger counts indicate a degenerate range.
pub const MAX_VALUE_TICKS: f64 = 50.0;

/// Picks a "nice" step (1, 2, 5 or 10 times a power of ten) for roughly
/// `target_count` ticks across `min..max`.
///
/// Returns `NaN` when the range is empty or `target_count` is zero.
#[must_use]
pub fn tick_size(min: f64, max: f64, target_count: usize) -> f64 {
    let raw = (max - min) / target_count as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return f64::NAN;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let ratio = raw / magnitude;

    if ratio > 5.0 {
        10.0 * magnitude
    } else if ratio > 2.0 {
        5.0 * magnitude
    } else if ratio > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    }
}

/// Horizontal gridline on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub position: f64,
    pub major: bool,
    pub value: f64,
    pub secondary_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTickOptions {
    /// Explicit major step; computed with [`tick_size`] when absent.
    pub tick_size: Option<f64>,
    pub target_count: usize,
    pub hide_minor_ticks: bool,
}

impl Default for ValueTickOptions {
    fn default() -> Self {
        Self {
            tick_size: None,
            target_count: DEFAULT_VALUE_TICK_TARGET,
            hide_minor_ticks: false,
        }
    }
}

/// Builds the value-axis ticks for the primary y range.
///
/// Each tick also reports the secondary-axis value found at the same pixel so
/// dual-axis charts can label both sides from one grid.
#[must_use]
pub fn value_axis_ticks(calc: &PixelCalc, options: ValueTickOptions) -> Vec<ValueTick> {
    let dims = calc.dimensions();
    let (min_y, max_y) = (dims.min_y, dims.max_y);

    let major_size = match options.tick_size {
        Some(size) if size > 0.0 => size,
        _ => tick_size(min_y, max_y, options.target_count),
    };
    let major_period = if options.hide_minor_ticks {
        1
    } else {
        VALUE_MINOR_TICKS_PER_MAJOR
    };
    let minor_size = major_size / major_period as f64;
    let tick_start = (min_y / minor_size).floor() * minor_size;

    let num_ticks = ((max_y - min_y) / minor_size).ceil();
    if num_ticks.is_nan() || !(0.0..=MAX_VALUE_TICKS).contains(&num_ticks) {
        return Vec::new();
    }

    let mut ticks: Vec<ValueTick> = Vec::with_capacity(num_ticks as usize + 1);
    for index in 0..=(num_ticks as usize) {
        let value = tick_start + index as f64 * minor_size;
        let pixel = calc.pix_y1(value);
        let position = snap_to_pixel_center(pixel);
        // Collisions happen when the range is tiny relative to the height.
        if ticks.iter().any(|tick| tick.position == position) {
            continue;
        }
        ticks.push(ValueTick {
            position,
            major: index % major_period == 0,
            value,
            secondary_value: calc.val_y2(pixel),
        });
    }

    ticks
}
