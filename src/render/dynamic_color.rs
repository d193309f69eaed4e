use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{DataPoint, PixelCalc, Stack, stacked_series};
use crate::error::{ChartError, ChartResult};
use crate::render::line_path::{LinePathOptions, build_line_path};
use crate::render::path::PathDescription;
use crate::render::primitives::Color;

pub type PointColorFn = Arc<dyn Fn(DataPoint, usize) -> Color + Send + Sync>;

/// Stroke color of a line: fixed, computed per point, or chosen by which
/// value band each part of the line falls into.
#[derive(Clone)]
pub enum LineColor {
    Constant(Color),
    PerPoint(PointColorFn),
    Stops(ColorStops),
}

impl LineColor {
    #[must_use]
    pub fn per_point(color: impl Fn(DataPoint, usize) -> Color + Send + Sync + 'static) -> Self {
        Self::PerPoint(Arc::new(color))
    }

    /// Loss color for points below zero, profit color otherwise.
    #[must_use]
    pub fn profit_loss(profit: Color, loss: Color) -> Self {
        Self::per_point(move |point, _| if point.y < 0.0 { loss } else { profit })
    }

    /// Checks every color known up front; per-point colors are only known
    /// once the line is built.
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Constant(color) => color.validate(),
            Self::PerPoint(_) => Ok(()),
            Self::Stops(stops) => stops
                .colors()
                .iter()
                .try_for_each(|color| color.validate()),
        }
    }
}

impl From<Color> for LineColor {
    fn from(color: Color) -> Self {
        Self::Constant(color)
    }
}

impl From<ColorStops> for LineColor {
    fn from(stops: ColorStops) -> Self {
        Self::Stops(stops)
    }
}

impl fmt::Debug for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(color) => f.debug_tuple("Constant").field(color).finish(),
            Self::PerPoint(_) => f.write_str("PerPoint(..)"),
            Self::Stops(stops) => f.debug_tuple("Stops").field(stops).finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ColorStopsRepr {
    changes: Vec<f64>,
    colors: Vec<Color>,
}

/// Value thresholds and the colors of the bands between them.
///
/// `colors[0]` applies below `changes[0]`, `colors[i]` from `changes[i - 1]`
/// upwards. Thresholds are finite and non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorStopsRepr", into = "ColorStopsRepr")]
pub struct ColorStops {
    changes: SmallVec<[f64; 4]>,
    colors: SmallVec<[Color; 5]>,
}

impl ColorStops {
    pub fn new(
        changes: impl IntoIterator<Item = f64>,
        colors: impl IntoIterator<Item = Color>,
    ) -> ChartResult<Self> {
        let changes: SmallVec<[f64; 4]> = changes.into_iter().collect();
        let colors: SmallVec<[Color; 5]> = colors.into_iter().collect();

        if colors.len() != changes.len() + 1 {
            return Err(ChartError::InvalidColorStops {
                changes: changes.len(),
                colors: colors.len(),
            });
        }
        colors.iter().try_for_each(|color| color.validate())?;
        if changes.iter().any(|change| !change.is_finite()) {
            return Err(ChartError::InvalidData(
                "color stop thresholds must be finite".to_owned(),
            ));
        }
        if changes.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ChartError::InvalidData(
                "color stop thresholds must be non-decreasing".to_owned(),
            ));
        }

        Ok(Self { changes, colors })
    }

    #[must_use]
    pub fn changes(&self) -> &[f64] {
        &self.changes
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of thresholds `value` reaches.
    #[must_use]
    pub fn band(&self, value: f64) -> usize {
        self.changes.iter().filter(|&&change| value >= change).count()
    }

    #[must_use]
    pub fn color_of_band(&self, band: usize) -> Color {
        self.colors[band.min(self.colors.len() - 1)]
    }
}

impl TryFrom<ColorStopsRepr> for ColorStops {
    type Error = ChartError;

    fn try_from(repr: ColorStopsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.changes, repr.colors)
    }
}

impl From<ColorStops> for ColorStopsRepr {
    fn from(stops: ColorStops) -> Self {
        Self {
            changes: stops.changes.into_vec(),
            colors: stops.colors.into_vec(),
        }
    }
}

/// Contiguous part of a line drawn in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredPath {
    pub path: PathDescription,
    pub color: Color,
}

/// Builds the colored sub-paths of one line.
///
/// A constant color yields at most one path and honours `options.fill`.
/// Per-point and stop colors split the line wherever the color changes; they
/// cannot be combined with `fill` and fail with
/// [`ChartError::DynamicColorFill`].
pub fn build_colored_paths(
    series: &[DataPoint],
    calc: &PixelCalc,
    stack: Option<&Stack>,
    options: LinePathOptions,
    color: &LineColor,
) -> ChartResult<Vec<ColoredPath>> {
    let dynamic = match color {
        LineColor::Constant(constant) => {
            let path = build_line_path(series, calc, stack, options);
            if path.is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![ColoredPath {
                path,
                color: *constant,
            }]);
        }
        LineColor::PerPoint(color_fn) => DynamicColor::PerPoint(&**color_fn),
        LineColor::Stops(stops) => DynamicColor::Stops(stops),
    };

    if options.fill {
        return Err(ChartError::DynamicColorFill);
    }
    Ok(dynamic_line_paths(series, calc, stack, options, dynamic))
}

/// The color variants that split a line into several paths.
enum DynamicColor<'a> {
    PerPoint(&'a (dyn Fn(DataPoint, usize) -> Color + Send + Sync)),
    Stops(&'a ColorStops),
}

fn dynamic_line_paths(
    series: &[DataPoint],
    calc: &PixelCalc,
    stack: Option<&Stack>,
    options: LinePathOptions,
    color: DynamicColor<'_>,
) -> Vec<ColoredPath> {
    let data = stacked_series(series, stack);
    if data.len() < 2 {
        return Vec::new();
    }

    let (points, runs) = match color {
        DynamicColor::PerPoint(color_fn) => {
            let runs = per_point_runs(&data, color_fn);
            (data, runs)
        }
        DynamicColor::Stops(stops) => split_at_stops(&data, stops),
    };

    let path = build_line_path(&points, calc, None, options.fill(false));
    let colored = chop_path(&path, &runs);
    debug!(
        points = points.len(),
        runs = runs.len(),
        paths = colored.len(),
        "split dynamically colored line"
    );
    colored
}

/// Color that applies from segment `start` until the next run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColorRun {
    start: usize,
    color: Color,
}

impl ColorRun {
    fn new(start: usize, color: Color) -> Self {
        Self { start, color }
    }
}

/// Segment `i` joins points `i` and `i + 1` and takes the color of point `i`.
fn per_point_runs(
    data: &[DataPoint],
    color_fn: &(dyn Fn(DataPoint, usize) -> Color + Send + Sync),
) -> Vec<ColorRun> {
    let colors: Vec<Color> = data
        .iter()
        .enumerate()
        .map(|(index, point)| color_fn(*point, index))
        .collect();

    let mut runs = vec![ColorRun::new(0, colors[0])];
    for index in 1..colors.len() - 1 {
        if colors[index] != colors[index - 1] {
            runs.push(ColorRun::new(index, colors[index]));
        }
    }
    runs
}

/// Inserts a crossover point on the threshold between every pair of points
/// in different bands, so each run ends exactly on the threshold line.
fn split_at_stops(data: &[DataPoint], stops: &ColorStops) -> (Vec<DataPoint>, Vec<ColorRun>) {
    let mut band = stops.band(data[0].y);
    let mut points = Vec::with_capacity(data.len() * 2);
    let mut runs = vec![ColorRun::new(0, stops.color_of_band(band))];
    points.push(data[0]);

    for pair in data.windows(2) {
        let (previous, point) = (pair[0], pair[1]);
        let next_band = stops.band(point.y);
        if next_band != band {
            let threshold = stops.changes()[band.min(next_band)];
            points.push(DataPoint::new((previous.x + point.x) / 2.0, threshold));
            runs.push(ColorRun::new(
                points.len() - 1,
                stops.color_of_band(next_band),
            ));
            band = next_band;
        }
        points.push(point);
    }

    (points, runs)
}

fn chop_path(path: &PathDescription, runs: &[ColorRun]) -> Vec<ColoredPath> {
    runs.iter()
        .enumerate()
        .map(|(index, run)| {
            let end = runs.get(index + 1).map_or(path.len(), |next| next.start);
            ColoredPath {
                path: path.slice(run.start..end),
                color: run.color,
            }
        })
        .filter(|colored| !colored.path.is_empty())
        .collect()
}
