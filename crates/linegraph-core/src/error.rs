// File: crates/linegraph-core/src/error.rs
// Summary: Validation errors raised before anything is mapped or drawn.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("series is empty; a line graph needs at least one point")]
    EmptySeries,
    #[error("point {index} has a non-finite x or y value")]
    NonFiniteValue { index: usize },
    #[error("invalid surface dimensions {width}x{height}; both sides must be finite and positive")]
    InvalidDimensions { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
