mod chart_frame;
mod geometry_config;

pub use chart_frame::{ChartFrame, LineSpec, MovingAverageSpec, build_chart_frame};
pub use geometry_config::ChartGeometryConfig;
