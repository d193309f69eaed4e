//! Pixel-space geometry: path descriptions, line/area construction and
//! color segmentation. Nothing here draws; hosts replay the descriptions on
//! their own surface.

pub mod dynamic_color;
pub mod line_path;
pub mod path;
mod primitives;

pub use dynamic_color::{ColorStops, ColoredPath, LineColor, PointColorFn, build_colored_paths};
pub use line_path::{
    ControlPair, GRAPH_CURVINESS, LinePathOptions, build_line_path, control_points,
    line_path_part,
};
pub use path::{PathCommand, PathDescription, PathPoint, PathSegment, SegmentKind};
pub use primitives::Color;
