use thiserror::Error;

/// Top-level error type for polyprobe.
#[derive(Debug, Error)]
pub enum PolyprobeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to geometric value construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least {min} vertices, got {got}")]
    TooFewVertices { min: usize, got: usize },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors related to polygon-building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not resolve collision mode: {0:?}")]
    UnknownMode(String),

    #[error("polygon not found in session")]
    PolygonNotFound,
}

/// Convenience type alias for results using [`PolyprobeError`].
pub type Result<T> = std::result::Result<T, PolyprobeError>;
