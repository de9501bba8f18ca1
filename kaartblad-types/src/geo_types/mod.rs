//! Geometry trait implementations for `geo-types` geometries and conversions into [`impls`](crate::impls) types.

mod coord;
mod linestring;
mod multi_polygon;
mod polygon;
