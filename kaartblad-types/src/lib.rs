//! Geometry primitives used to select map sheets by a place boundary.
//!
//! The crate follows a trait based approach: algorithms are written against the [`Contour`], [`Polygon`] and
//! [`MultiPolygon`] traits, so they work with the simple implementations from the [`impls`] module as well as with
//! foreign geometry types (`geo-types` geometries implement the same traits with the `geo-types` feature).
//!
//! All algorithms operate in planar (cartesian) coordinates. Use [`geo::Crs`] to keep track of which reference
//! system a geometry is expressed in; the crate never reprojects coordinates.
//!
//! The main entry point for selection is [`CartesianMultiPolygon::intersects`], which returns `true` when two
//! shapes share at least one point, including shapes that only touch by an edge or a vertex.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod impls;
pub mod multi_polygon;
pub mod polygon;
pub mod segment;
pub mod validation;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use cartesian::{CartesianMultiPolygon, CartesianPolygon, Point2d, PointPosition, Rect};
pub use contour::Contour;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
