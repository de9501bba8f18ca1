//! Multipolygon is a set of polygons treated as one geometry.

use crate::polygon::Polygon;

/// Geometry consisting of several polygons.
///
/// A place boundary is usually delivered as a multipolygon (a municipality with islands, for example), while a map
/// sheet is a multipolygon with a single part.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;
}
