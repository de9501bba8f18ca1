//! Implementations of geometry traits.

mod contour;
mod multi_polygon;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
