//! Error types used by the crate.

use kaartblad_types::error::GeometryError;
use kaartblad_types::geo::Crs;
use thiserror::Error;

/// Kaartblad error type.
#[derive(Debug, Error)]
pub enum KaartbladError {
    /// The query boundary is empty, cannot be parsed or does not describe an area.
    #[error("invalid boundary geometry: {0}")]
    InvalidGeometry(String),
    /// Boundary and catalog are expressed in different coordinate reference systems.
    #[error("boundary is in {boundary}, but the catalog is in {catalog}")]
    CrsMismatch {
        /// Reference of the boundary.
        boundary: Crs,
        /// Reference of the catalog.
        catalog: Crs,
    },
    /// The catalog document is not a sheet index.
    #[error("invalid catalog: {0}")]
    Catalog(String),
    /// Error decoding GeoJSON.
    #[error("failed to decode GeoJSON")]
    GeoJson(#[from] geojson::Error),
}

impl From<GeometryError> for KaartbladError {
    fn from(value: GeometryError) -> Self {
        Self::InvalidGeometry(value.to_string())
    }
}
