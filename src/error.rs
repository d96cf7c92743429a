use thiserror::Error;

/// Top-level error type for the floor-plan engine.
#[derive(Debug, Error)]
pub enum PlanoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl From<serde_json::Error> for PlanoError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArgument(format!("malformed floor plan payload: {err}"))
    }
}

/// Convenience type alias for results using [`PlanoError`].
pub type Result<T> = std::result::Result<T, PlanoError>;
