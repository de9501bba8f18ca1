use geo_types::{CoordFloat, CoordNum, LineString};

use crate::cartesian::Point2;
use crate::contour::Contour;
use crate::impls::ClosedContour;
use crate::polygon::Polygon;

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &Self::Contour {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors().iter()
    }
}

impl<T: CoordFloat + nalgebra::Scalar> From<&geo_types::Polygon<T>> for crate::impls::Polygon<Point2<T>> {
    fn from(polygon: &geo_types::Polygon<T>) -> Self {
        crate::impls::Polygon::new(
            convert_ring(polygon.exterior()),
            polygon.interiors().iter().map(convert_ring).collect(),
        )
    }
}

fn convert_ring<T: CoordFloat + nalgebra::Scalar>(ring: &LineString<T>) -> ClosedContour<Point2<T>> {
    ClosedContour::new(
        Contour::iter_points(ring)
            .map(|c| Point2::new(c.x, c.y))
            .collect(),
    )
}
