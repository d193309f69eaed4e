//! fin-chart-rs: pixel geometry for time-series charts.
//!
//! The crate turns raw `(time, value)` series into drawable geometry: axis
//! ticks, straight or smoothed line paths, filled areas on top of stacked
//! layers and color-segmented lines. It performs no drawing itself; hosts
//! replay the returned [`render::PathDescription`]s on their own surface.
//!
//! `core` holds the coordinate, tick, averaging and stacking math, `render`
//! the path construction and `api` the serializable frame builder.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartFrame, ChartGeometryConfig, LineSpec, build_chart_frame};
pub use error::{ChartError, ChartResult};
