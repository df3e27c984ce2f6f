use thiserror::Error;

/// Top-level error type for the forecast geometry pipeline.
#[derive(Debug, Error)]
pub enum StormconeError {
    #[error(transparent)]
    Track(#[from] TrackError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while densifying a forecast track.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("insufficient data: at least {required} forecast fixes required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("lead time {lead_hours} h is outside the error curve domain [{min}, {max}]")]
    OutOfRange { lead_hours: f64, min: f64, max: f64 },
}

/// Errors related to polygon construction and geometric queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("empty geometry: nothing with positive area to frame")]
    EmptyGeometry,

    #[error("convex hull failed: {0}")]
    Hull(String),
}

/// Malformed input handed over by the advisory collaborator or by configuration.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("lead times must be strictly increasing (violated at fix {index})")]
    UnorderedLeadTimes { index: usize },

    #[error("invalid error curve: {0}")]
    InvalidErrorCurve(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`StormconeError`].
pub type Result<T> = std::result::Result<T, StormconeError>;
