use geozero::wkt::Wkt;
use geozero::ToGeo;
use kaartblad_types::cartesian::{CartesianMultiPolygon, Point2d, Rect};
use kaartblad_types::geo::Crs;
use kaartblad_types::impls::MultiPolygon;
use kaartblad_types::validation::validate_multi_polygon;

use crate::error::KaartbladError;
use crate::tile::TileFeature;

/// Outline of the place used as the spatial query.
///
/// A boundary is always a valid areal geometry: every constructor validates its input and fails with
/// [`KaartbladError::InvalidGeometry`] otherwise. A polygon boundary is stored as a multipolygon with one part.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    geometry: MultiPolygon<Point2d>,
    extent: Rect,
    crs: Crs,
}

impl Boundary {
    /// Creates a boundary from a multipolygon in the given reference system.
    pub fn new(geometry: impl Into<MultiPolygon<Point2d>>, crs: Crs) -> Result<Self, KaartbladError> {
        let geometry = geometry.into();
        validate_multi_polygon(&geometry)?;
        let extent = geometry.bounding_rectangle().ok_or_else(|| {
            KaartbladError::InvalidGeometry("boundary has no points".to_string())
        })?;

        Ok(Self {
            geometry,
            extent,
            crs,
        })
    }

    /// Parses a `POLYGON` or `MULTIPOLYGON` WKT string, such as the `geometrie_rd` field of a locatieserver
    /// lookup response.
    ///
    /// An EWKT `SRID=<code>;` prefix is accepted. If present, it must match `crs`.
    pub fn from_wkt(wkt: &str, crs: Crs) -> Result<Self, KaartbladError> {
        let wkt = strip_srid(wkt, crs)?;
        let geometry = Wkt(wkt)
            .to_geo()
            .map_err(|err| KaartbladError::InvalidGeometry(err.to_string()))?;

        Self::from_geo(&geometry, crs)
    }

    /// Creates a boundary from a `Polygon` or `MultiPolygon` GeoJSON geometry.
    pub fn from_geojson(geometry: &geojson::Geometry, crs: Crs) -> Result<Self, KaartbladError> {
        Self::new(MultiPolygon::<Point2d>::try_from(geometry)?, crs)
    }

    /// Creates a boundary from an areal `geo-types` geometry.
    pub fn from_geo(geometry: &geo_types::Geometry<f64>, crs: Crs) -> Result<Self, KaartbladError> {
        Self::new(MultiPolygon::<Point2d>::try_from(geometry)?, crs)
    }

    /// Geometry of the boundary.
    pub fn geometry(&self) -> &MultiPolygon<Point2d> {
        &self.geometry
    }

    /// Bounding rectangle of the boundary.
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Reference system the boundary is expressed in.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Returns true if the tile geometry has at least one common point with the boundary.
    ///
    /// The tile is assumed to be in the same reference system as the boundary.
    pub fn intersects(&self, tile: &TileFeature) -> bool {
        match tile.extent() {
            Some(tile_extent) if tile_extent.intersects(&self.extent) => {
                self.geometry.intersects(tile.geometry())
            }
            _ => false,
        }
    }
}

fn strip_srid(wkt: &str, crs: Crs) -> Result<&str, KaartbladError> {
    let trimmed = wkt.trim_start();
    let Some(rest) = trimmed.strip_prefix("SRID=") else {
        return Ok(trimmed);
    };

    let (code, geometry) = rest.split_once(';').ok_or_else(|| {
        KaartbladError::InvalidGeometry("EWKT SRID prefix is not terminated by ';'".to_string())
    })?;
    let srid = code
        .trim()
        .parse::<u32>()
        .map(Crs::epsg)
        .map_err(|_| KaartbladError::InvalidGeometry(format!("invalid SRID: {code}")))?;

    if srid != crs {
        return Err(KaartbladError::CrsMismatch {
            boundary: srid,
            catalog: crs,
        });
    }

    Ok(geometry)
}
