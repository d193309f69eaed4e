pub mod calc;
pub mod moving_average;
pub mod primitives;
pub mod scale;
pub mod stack;
pub mod time_ticks;
pub mod types;
pub mod value_ticks;

pub use calc::PixelCalc;
pub use moving_average::{MAX_RESAMPLED_POINTS_PER_SAMPLE, moving_average};
pub use scale::LinearScale;
pub use stack::{reduce_stack, stacked_series, stacked_y};
pub use time_ticks::{
    AxisTick, MAX_TIME_TICKS, TickMajor, TimeRegime, TimeTick, time_axis_ticks, time_series_ticks,
};
pub use types::{DataPoint, Dimensions, Padding, Series, Stack, YAxis};
pub use value_ticks::{
    DEFAULT_VALUE_TICK_TARGET, MAX_VALUE_TICKS, ValueTick, ValueTickOptions, tick_size,
    value_axis_ticks,
};
