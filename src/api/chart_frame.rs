use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisTick, DataPoint, Dimensions, PixelCalc, Series, ValueTick, YAxis, moving_average,
    time_axis_ticks, value_axis_ticks,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ColoredPath, LineColor, LinePathOptions, build_colored_paths};

use super::ChartGeometryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverageSpec {
    pub period: usize,
    #[serde(default)]
    pub time_weighted: bool,
}

/// One line to draw: its data, optional smoothing by moving average, the
/// layers it sits on and how it is stroked.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub series: Series,
    pub moving_average: Option<MovingAverageSpec>,
    pub stack: Option<Vec<Series>>,
    pub options: LinePathOptions,
    pub color: LineColor,
}

impl LineSpec {
    #[must_use]
    pub fn new(series: impl Into<Series>, color: impl Into<LineColor>) -> Self {
        Self {
            series: series.into(),
            moving_average: None,
            stack: None,
            options: LinePathOptions::default(),
            color: color.into(),
        }
    }

    #[must_use]
    pub fn with_moving_average(mut self, period: usize, time_weighted: bool) -> Self {
        self.moving_average = Some(MovingAverageSpec {
            period,
            time_weighted,
        });
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Vec<Series>) -> Self {
        self.stack = Some(stack);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: LinePathOptions) -> Self {
        self.options = options;
        self
    }

    fn effective_series(&self) -> Series {
        match self.moving_average {
            Some(spec) => moving_average(&self.series, spec.period, spec.time_weighted),
            None => self.series.clone(),
        }
    }
}

/// Everything a host needs to draw one chart: gridlines and colored paths,
/// all in pixel space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartFrame {
    pub time_ticks: Vec<AxisTick>,
    pub value_ticks: Vec<ValueTick>,
    /// Colored sub-paths of each input line, in input order.
    pub lines: Vec<Vec<ColoredPath>>,
}

impl ChartFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_ticks.is_empty()
            && self.value_ticks.is_empty()
            && self.lines.iter().all(Vec::is_empty)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart frame: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart frame: {e}")))
    }
}

/// Computes ticks and paths for `lines` inside `dimensions`.
///
/// The config's curviness replaces the per-line value. A collapsed x or
/// primary y range yields a frame with no ticks and no paths.
///
/// Fails on non-finite geometry, an invalid config, a color channel outside
/// `0..=1`, or a filled line with a dynamic color.
pub fn build_chart_frame(
    dimensions: Dimensions,
    config: &ChartGeometryConfig,
    lines: &[LineSpec],
) -> ChartResult<ChartFrame> {
    dimensions.validate()?;
    config.validate()?;
    lines
        .iter()
        .try_for_each(|line| line.color.validate())?;

    let calc = PixelCalc::new(dimensions);
    if dimensions.is_degenerate(YAxis::Primary) {
        debug!(
            min_x = dimensions.min_x,
            max_x = dimensions.max_x,
            min_y = dimensions.min_y,
            max_y = dimensions.max_y,
            "degenerate range, returning empty frame"
        );
        return Ok(ChartFrame {
            lines: vec![Vec::new(); lines.len()],
            ..ChartFrame::default()
        });
    }

    let time_ticks = time_axis_ticks(&calc, config.time_offset);
    let value_ticks = value_axis_ticks(&calc, config.value_tick_options());

    let paths = lines
        .iter()
        .map(|line| {
            let series: Vec<DataPoint> = line.effective_series();
            let options = line.options.curviness(config.curviness);
            build_colored_paths(
                &series,
                &calc,
                line.stack.as_deref(),
                options,
                &line.color,
            )
        })
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(
        time_ticks = time_ticks.len(),
        value_ticks = value_ticks.len(),
        lines = paths.len(),
        "built chart frame"
    );

    Ok(ChartFrame {
        time_ticks,
        value_ticks,
        lines: paths,
    })
}
