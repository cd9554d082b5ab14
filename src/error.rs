use thiserror::Error;

/// Top-level error type for the drawing utilities.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by malformed vector or point input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("expected a 2D or 3D vector, got {found} components")]
    InvalidDimension { found: usize },

    #[error("expected exactly {expected} points, got {found}")]
    InvalidArgumentCount { expected: usize, found: usize },
}

/// Errors related to aggregate queries.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("empty result: {0}")]
    EmptyResult(String),
}

/// Convenience type alias for results using [`DrawError`].
pub type Result<T> = std::result::Result<T, DrawError>;
