/// Error types for chart geometry
use thiserror::Error;

/// Failures raised while mapping series into pixel space.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ChartError {
    /// The value range has no extent, so normalizing would divide by zero
    #[error("Degenerate value range: min and max are both {value}")]
    DegenerateRange { value: f64 },

    /// Low and high series must pair up index by index
    #[error("Series length mismatch (lows: {lows}, highs: {highs})")]
    LengthMismatch { lows: usize, highs: usize },
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
