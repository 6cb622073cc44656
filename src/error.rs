use thiserror::Error;

/// Errors raised when building, simplifying or rendering curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },
    #[error("epsilon must be non-negative, got {0}")]
    InvalidEpsilon(f64),
    #[error("delta must be positive and finite, got {0}")]
    NonPositiveDelta(f64),
    #[error("range start {start} must be less than range end {end}")]
    EmptyRange { start: f64, end: f64 },
    #[error("bounds must be finite")]
    NonFiniteBound,
    #[error("range holds more samples than can be counted")]
    TooManySamples,
    #[error("line segment starts and ends at the same point")]
    DegenerateSegment,
    #[error("No points in curve")]
    EmptyCurve,
    #[error("grid must be at least 1x1, got {width}x{height}")]
    ZeroSizedGrid { width: usize, height: usize },
    #[error("cannot normalize a vector of magnitude {magnitude}")]
    Domain { magnitude: f64 },
}

pub type Result<T> = std::result::Result<T, CurveError>;
