//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Geometry is structurally valid, but does not describe an area.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
    /// Coordinate reference system identifier cannot be recognized.
    #[error("unknown coordinate reference system: {0}")]
    UnknownCrs(String),
}
