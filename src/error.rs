use thiserror::Error;

use crate::point::COORD_LIMIT;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors of the editing, session and output layers.
/// Curve evaluation itself never fails, it yields empty or NaN results instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("coordinate {value} is outside of [-{limit}, {limit}]", limit = COORD_LIMIT)]
    InvalidCoordinate { value: f64 },
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("no control point at index {index} (have {len})")]
    PointIndex { index: usize, len: usize },
    #[error("unknown evaluation method `{0}`, expected `parametric` or `matrix`")]
    UnknownMethod(String),
    #[error("unknown output format `{0}`, expected `png` or `svg`")]
    UnknownFormat(String),
    #[error("drawing failed: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid session file: {0}")]
    Json(#[from] serde_json::Error),
}
