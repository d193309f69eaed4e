use std::fmt::Write as _;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PathPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    Line {
        to: PathPoint,
    },
    Quadratic {
        control: PathPoint,
        to: PathPoint,
    },
    Cubic {
        control1: PathPoint,
        control2: PathPoint,
        to: PathPoint,
    },
}

/// One drawable span, carrying its own start so a description can be cut
/// at any segment boundary and still be drawn on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: PathPoint,
    #[serde(flatten)]
    pub kind: SegmentKind,
}

impl PathSegment {
    #[must_use]
    pub const fn line(start: PathPoint, to: PathPoint) -> Self {
        Self {
            start,
            kind: SegmentKind::Line { to },
        }
    }

    #[must_use]
    pub const fn quadratic(start: PathPoint, control: PathPoint, to: PathPoint) -> Self {
        Self {
            start,
            kind: SegmentKind::Quadratic { control, to },
        }
    }

    #[must_use]
    pub const fn cubic(
        start: PathPoint,
        control1: PathPoint,
        control2: PathPoint,
        to: PathPoint,
    ) -> Self {
        Self {
            start,
            kind: SegmentKind::Cubic {
                control1,
                control2,
                to,
            },
        }
    }

    #[must_use]
    pub fn end(&self) -> PathPoint {
        match self.kind {
            SegmentKind::Line { to }
            | SegmentKind::Quadratic { to, .. }
            | SegmentKind::Cubic { to, .. } => to,
        }
    }
}

/// Drawing-surface agnostic command stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PathPoint),
    LineTo(PathPoint),
    QuadTo {
        control: PathPoint,
        to: PathPoint,
    },
    CubicTo {
        control1: PathPoint,
        control2: PathPoint,
        to: PathPoint,
    },
}

/// Ordered segments making up one line or filled outline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathDescription {
    segments: Vec<PathSegment>,
}

impl PathDescription {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Copies out the segments in `range`, clamped to the description.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.segments.len());
        let start = range.start.min(end);
        Self {
            segments: self.segments[start..end].to_vec(),
        }
    }

    /// Explicit commands, with a move wherever a segment does not start at
    /// the previous segment's end.
    #[must_use]
    pub fn commands(&self) -> Vec<PathCommand> {
        let mut commands = Vec::with_capacity(self.segments.len() + 1);
        let mut cursor: Option<PathPoint> = None;
        for segment in &self.segments {
            if cursor != Some(segment.start) {
                commands.push(PathCommand::MoveTo(segment.start));
            }
            commands.push(match segment.kind {
                SegmentKind::Line { to } => PathCommand::LineTo(to),
                SegmentKind::Quadratic { control, to } => PathCommand::QuadTo { control, to },
                SegmentKind::Cubic {
                    control1,
                    control2,
                    to,
                } => PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                },
            });
            cursor = Some(segment.end());
        }
        commands
    }

    /// Compact SVG-style path data, e.g. `M0,10 L5,2.5 Q7,1 9,0`.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for command in self.commands() {
            if !out.is_empty() {
                out.push(' ');
            }
            match command {
                PathCommand::MoveTo(to) => {
                    out.push('M');
                    write_point(&mut out, to);
                }
                PathCommand::LineTo(to) => {
                    out.push('L');
                    write_point(&mut out, to);
                }
                PathCommand::QuadTo { control, to } => {
                    out.push('Q');
                    write_point(&mut out, control);
                    out.push(' ');
                    write_point(&mut out, to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    out.push('C');
                    write_point(&mut out, control1);
                    out.push(' ');
                    write_point(&mut out, control2);
                    out.push(' ');
                    write_point(&mut out, to);
                }
            }
        }
        out
    }
}

impl FromIterator<PathSegment> for PathDescription {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathSegment> for PathDescription {
    fn extend<I: IntoIterator<Item = PathSegment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}

fn write_point(out: &mut String, point: PathPoint) {
    // `-0` reads as noise in path data.
    let clean = |value: f64| if value == 0.0 { 0.0 } else { value };
    let _ = write!(out, "{},{}", clean(point.x), clean(point.y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_moves_only_on_discontinuity() {
        let path = PathDescription::from_segments(vec![
            PathSegment::line(PathPoint::new(0.0, 10.0), PathPoint::new(5.0, 2.5)),
            PathSegment::quadratic(
                PathPoint::new(5.0, 2.5),
                PathPoint::new(7.0, 1.0),
                PathPoint::new(9.0, -0.0),
            ),
            PathSegment::line(PathPoint::new(20.0, 20.0), PathPoint::new(30.0, 20.0)),
        ]);

        assert_eq!(
            path.to_path_data(),
            "M0,10 L5,2.5 Q7,1 9,0 M20,20 L30,20"
        );
        assert_eq!(path.commands().len(), 5);
    }

    #[test]
    fn slice_clamps_out_of_range_bounds() {
        let path = PathDescription::from_segments(vec![PathSegment::line(
            PathPoint::new(0.0, 0.0),
            PathPoint::new(1.0, 1.0),
        )]);
        assert_eq!(path.slice(0..10).len(), 1);
        assert!(path.slice(3..10).is_empty());
        assert!(PathDescription::empty().to_path_data().is_empty());
    }
}
