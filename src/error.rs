use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(
        "invalid color stops: {colors} colors for {changes} thresholds (expected thresholds + 1)"
    )]
    InvalidColorStops { changes: usize, colors: usize },

    #[error("dynamically colored lines cannot be filled")]
    DynamicColorFill,
}
