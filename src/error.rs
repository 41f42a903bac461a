use std::io;

use thiserror::Error;

use crate::geometry::GeometryError;

pub type Result<T> = std::result::Result<T, MungeError>;

/// Anything that aborts a munge run. Filtered records are not errors and never
/// show up here.
#[derive(Debug, Error)]
pub enum MungeError {
    #[error("row {row_id}: field {field} is not a number: {value:?}")]
    InvalidNumber {
        row_id: String,
        field: &'static str,
        value: String,
    },
    #[error("row {row_id}: unparseable update timestamp {value:?}")]
    InvalidTimestamp { row_id: String, value: String },
    #[error("row {row_id}: bad geometry: {source}")]
    Geometry {
        row_id: String,
        #[source]
        source: GeometryError,
    },
    #[error("street name {name:?} does not start with one of N, S, W, E")]
    UnknownDirection { name: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
