mod cartesian_point;
mod contour;
mod multi_polygon;
mod polygon;

pub use cartesian_point::CartesianPoint2d;
pub use contour::{CartesianContour, PointPosition};
pub use multi_polygon::CartesianMultiPolygon;
pub use polygon::CartesianPolygon;
