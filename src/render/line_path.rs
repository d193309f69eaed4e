use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::{round_half_up, round_to_tenth};
use crate::core::{DataPoint, PixelCalc, Stack, YAxis, reduce_stack, stacked_series};
use crate::render::path::{PathDescription, PathPoint, PathSegment};

/// How far control points reach along the neighbour chord, as a fraction of
/// the chord length.
pub const GRAPH_CURVINESS: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePathOptions {
    #[serde(default)]
    pub axis: YAxis,
    #[serde(default)]
    pub smooth: bool,
    #[serde(default)]
    pub fill: bool,
    #[serde(default = "default_curviness")]
    pub curviness: f64,
}

fn default_curviness() -> f64 {
    GRAPH_CURVINESS
}

impl Default for LinePathOptions {
    fn default() -> Self {
        Self {
            axis: YAxis::Primary,
            smooth: false,
            fill: false,
            curviness: GRAPH_CURVINESS,
        }
    }
}

impl LinePathOptions {
    #[must_use]
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn axis(mut self, axis: YAxis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn curviness(mut self, curviness: f64) -> Self {
        self.curviness = curviness;
        self
    }
}

/// Incoming and outgoing control point around one interior vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPair {
    pub incoming: PathPoint,
    pub outgoing: PathPoint,
}

/// Builds the path for `series`, optionally drawn on top of `stack`.
///
/// Every anchor is rounded to one decimal; control points to whole pixels.
/// A collapsed range, or any point (or stack floor point) whose pixel is not
/// finite, produces an empty description.
#[must_use]
pub fn build_line_path(
    series: &[DataPoint],
    calc: &PixelCalc,
    stack: Option<&Stack>,
    options: LinePathOptions,
) -> PathDescription {
    if calc.is_degenerate(options.axis) {
        debug!(axis = ?options.axis, "skipping path for degenerate range");
        return PathDescription::empty();
    }

    let pixels = project_points(&stacked_series(series, stack), calc, options.axis);
    if !all_finite(&pixels) {
        debug!(points = pixels.len(), "skipping path with non-finite pixels");
        return PathDescription::empty();
    }
    let mut path = line_path_part(&pixels, options.smooth, options.curviness);
    if !options.fill || pixels.is_empty() {
        return path;
    }

    let last = round_point(pixels[pixels.len() - 1]);
    match stack {
        Some(stack) => {
            let mut floor = project_points(&reduce_stack(stack), calc, options.axis);
            if !all_finite(&floor) {
                debug!(points = floor.len(), "skipping fill with non-finite stack floor");
                return PathDescription::empty();
            }
            floor.reverse();
            if let Some(&floor_start) = floor.first() {
                path.push(PathSegment::line(last, round_point(floor_start)));
            }
            path.extend(
                line_path_part(&floor, options.smooth, options.curviness)
                    .segments()
                    .iter()
                    .copied(),
            );
        }
        None => {
            let baseline = round_to_tenth(calc.pix_y(options.axis, 0.0));
            if !baseline.is_finite() {
                debug!("skipping fill with non-finite baseline");
                return PathDescription::empty();
            }
            let first = round_point(pixels[0]);
            let corner = PathPoint::new(last.x, baseline);
            path.push(PathSegment::line(last, corner));
            path.push(PathSegment::line(corner, PathPoint::new(first.x, baseline)));
        }
    }

    path
}

/// Straight or smoothed path through already projected pixels.
#[must_use]
pub fn line_path_part(pixels: &[PathPoint], smooth: bool, curviness: f64) -> PathDescription {
    let rounded: Vec<PathPoint> = pixels.iter().copied().map(round_point).collect();
    if !smooth || pixels.len() < 3 {
        return rounded
            .windows(2)
            .map(|pair| PathSegment::line(pair[0], pair[1]))
            .collect();
    }

    let controls = control_points(pixels, curviness);
    let last_span = pixels.len() - 2;
    (0..pixels.len() - 1)
        .map(|index| {
            let start = rounded[index];
            let to = rounded[index + 1];
            match (controls[index], controls[index + 1]) {
                (_, Some(next)) if index == 0 => PathSegment::quadratic(start, next.incoming, to),
                (Some(current), _) if index == last_span => {
                    PathSegment::quadratic(start, current.outgoing, to)
                }
                (Some(current), Some(next)) => {
                    PathSegment::cubic(start, current.outgoing, next.incoming, to)
                }
                _ => PathSegment::line(start, to),
            }
        })
        .collect()
}

/// Control points for every vertex; the two endpoints get none.
///
/// Each interior vertex gets a pair on the line parallel to the chord between
/// its neighbours, split in proportion to the lengths of its two adjacent
/// segments.
#[must_use]
pub fn control_points(pixels: &[PathPoint], curviness: f64) -> Vec<Option<ControlPair>> {
    let count = pixels.len();
    (0..count)
        .map(|index| {
            if index == 0 || index + 1 >= count {
                return None;
            }
            Some(control_pair(
                pixels[index - 1],
                pixels[index],
                pixels[index + 1],
                curviness,
            ))
        })
        .collect()
}

fn control_pair(
    previous: PathPoint,
    point: PathPoint,
    next: PathPoint,
    curviness: f64,
) -> ControlPair {
    let dist_left = ((point.x - previous.x).powi(2) + (point.y - previous.y).powi(2)).sqrt();
    let dist_right = ((next.x - point.x).powi(2) + (next.y - point.y).powi(2)).sqrt();
    let total = dist_left + dist_right;
    if total == 0.0 {
        let pinned = PathPoint::new(round_half_up(point.x), round_half_up(point.y));
        return ControlPair {
            incoming: pinned,
            outgoing: pinned,
        };
    }

    let factor_in = curviness * (dist_left / total);
    let factor_out = curviness - factor_in;
    let (chord_x, chord_y) = (next.x - previous.x, next.y - previous.y);

    ControlPair {
        incoming: PathPoint::new(
            round_half_up(point.x - factor_in * chord_x),
            round_half_up(point.y - factor_in * chord_y),
        ),
        outgoing: PathPoint::new(
            round_half_up(point.x + factor_out * chord_x),
            round_half_up(point.y + factor_out * chord_y),
        ),
    }
}

pub(crate) fn project_points(
    points: &[DataPoint],
    calc: &PixelCalc,
    axis: YAxis,
) -> Vec<PathPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| PathPoint::from(calc.pix_point(axis, *point)))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| PathPoint::from(calc.pix_point(axis, *point)))
            .collect()
    }
}

fn all_finite(pixels: &[PathPoint]) -> bool {
    pixels.iter().all(|pixel| pixel.x.is_finite() && pixel.y.is_finite())
}

fn round_point(point: PathPoint) -> PathPoint {
    PathPoint::new(round_to_tenth(point.x), round_to_tenth(point.y))
}
