use thiserror::Error;

/// Top-level error type for point-to-geometry distance queries.
#[derive(Debug, Error)]
pub enum PointDistError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometry construction and validation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("linear ring is not closed: first ({x0}, {y0}) != last ({x1}, {y1})")]
    RingNotClosed { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("linear ring has {len} coordinates, expected 0 or at least 4")]
    RingTooShort { len: usize },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("unsupported geometry kind: {0}")]
    UnsupportedGeometry(String),
}

/// Errors related to distance operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("geometry nesting exceeds maximum depth {max_depth}")]
    DepthExceeded { max_depth: usize },
}

/// Convenience type alias for results using [`PointDistError`].
pub type Result<T> = std::result::Result<T, PointDistError>;
