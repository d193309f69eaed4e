use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// One sample of a time series: `x` is usually a unix timestamp in seconds,
/// `y` a value such as a price or an amount in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Points sorted ascending by `x`. Spacing may be irregular.
pub type Series = Vec<DataPoint>;

/// Layers summed on top of each other; every layer is expected to share the
/// x-domain of the first one.
pub type Stack = [Series];

/// Chart padding in pixels, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<[f64; 4]> for Padding {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// Selects which vertical range a series is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxis {
    #[default]
    Primary,
    Secondary,
}

/// Viewport plus the data ranges mapped onto it.
///
/// `min_y2`/`max_y2` describe the secondary axis and fall back to the primary
/// range when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    #[serde(default)]
    pub min_y2: Option<f64>,
    #[serde(default)]
    pub max_y2: Option<f64>,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
            min_y2: None,
            max_y2: None,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, min_x: f64, max_x: f64) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min_y: f64, max_y: f64) -> Self {
        self.min_y = min_y;
        self.max_y = max_y;
        self
    }

    #[must_use]
    pub fn with_secondary_y_range(mut self, min_y2: f64, max_y2: f64) -> Self {
        self.min_y2 = Some(min_y2);
        self.max_y2 = Some(max_y2);
        self
    }

    #[must_use]
    pub fn secondary_y_range(&self) -> (f64, f64) {
        (
            self.min_y2.unwrap_or(self.min_y),
            self.max_y2.unwrap_or(self.max_y),
        )
    }

    #[must_use]
    pub fn y_range(&self, axis: YAxis) -> (f64, f64) {
        match axis {
            YAxis::Primary => (self.min_y, self.max_y),
            YAxis::Secondary => self.secondary_y_range(),
        }
    }

    /// True when the x range or the selected y range collapses to a point.
    #[must_use]
    pub fn is_degenerate(&self, axis: YAxis) -> bool {
        let (min_y, max_y) = self.y_range(axis);
        self.min_x == self.max_x || min_y == max_y
    }

    /// Rejects non-finite geometry. Equal bounds are allowed here; they are a
    /// data condition handled by the consumers, not a configuration error.
    pub fn validate(&self) -> ChartResult<()> {
        let (min_y2, max_y2) = self.secondary_y_range();
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
            ("padding.left", self.padding.left),
            ("min_x", self.min_x),
            ("max_x", self.max_x),
            ("min_y", self.min_y),
            ("max_y", self.max_y),
            ("min_y2", min_y2),
            ("max_y2", max_y2),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "dimension `{field}` must be finite"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
