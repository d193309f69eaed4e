use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_VALUE_TICK_TARGET, ValueTickOptions};
use crate::error::{ChartError, ChartResult};
use crate::render::GRAPH_CURVINESS;

/// Host-level tuning shared by every line of a frame.
///
/// This type is serializable so host applications can persist/load chart
/// geometry setup alongside their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometryConfig {
    #[serde(default = "default_curviness")]
    pub curviness: f64,
    #[serde(default = "default_value_tick_target")]
    pub value_tick_target: usize,
    #[serde(default)]
    pub hide_minor_value_ticks: bool,
    /// Seconds added to x values before they are labelled on the time axis.
    #[serde(default)]
    pub time_offset: f64,
}

impl Default for ChartGeometryConfig {
    fn default() -> Self {
        Self {
            curviness: default_curviness(),
            value_tick_target: default_value_tick_target(),
            hide_minor_value_ticks: false,
            time_offset: 0.0,
        }
    }
}

impl ChartGeometryConfig {
    #[must_use]
    pub fn with_curviness(mut self, curviness: f64) -> Self {
        self.curviness = curviness;
        self
    }

    #[must_use]
    pub fn with_value_tick_target(mut self, target: usize) -> Self {
        self.value_tick_target = target;
        self
    }

    #[must_use]
    pub fn with_hide_minor_value_ticks(mut self, hide: bool) -> Self {
        self.hide_minor_value_ticks = hide;
        self
    }

    #[must_use]
    pub fn with_time_offset(mut self, offset: f64) -> Self {
        self.time_offset = offset;
        self
    }

    #[must_use]
    pub fn value_tick_options(&self) -> ValueTickOptions {
        ValueTickOptions {
            tick_size: None,
            target_count: self.value_tick_target,
            hide_minor_ticks: self.hide_minor_value_ticks,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.curviness.is_finite() || self.curviness < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "curviness must be finite and >= 0, got {}",
                self.curviness
            )));
        }
        if self.value_tick_target == 0 {
            return Err(ChartError::InvalidData(
                "value tick target must be > 0".to_owned(),
            ));
        }
        if !self.time_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "time offset must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse geometry config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize geometry config: {e}"))
        })
    }
}

fn default_curviness() -> f64 {
    GRAPH_CURVINESS
}

fn default_value_tick_target() -> usize {
    DEFAULT_VALUE_TICK_TARGET
}
