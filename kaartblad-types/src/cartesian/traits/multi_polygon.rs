use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::cartesian::traits::polygon::CartesianPolygon;
use crate::cartesian::Rect;
use crate::contour::Contour;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// Multipolygon in 2d cartesian coordinates. This trait is auto-implemented for all illegible types.
pub trait CartesianMultiPolygon {
    /// Type of the points of the multipolygon.
    type Point: CartesianPoint2d;

    /// Returns true if the `point` lies inside or on the boundary of any of the parts.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;

    /// Bounding rectangle of all the parts. Returns `None` if there are no parts with points.
    fn bounding_rectangle(&self) -> Option<Rect<<Self::Point as CartesianPoint2d>::Num>>;

    /// Returns true if any part of `self` has at least one common point with any part of `other`.
    ///
    /// See [`CartesianPolygon::intersects`] for the exact semantics.
    fn intersects<Other, Poly, Q>(&self, other: &Other) -> bool
    where
        Q: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>,
        Other: MultiPolygon<Polygon = Poly>,
        Poly: Polygon,
        Poly::Contour: Contour<Point = Q>;
}

impl<P, C, Poly, T> CartesianMultiPolygon for T
where
    P: CartesianPoint2d,
    C: Contour<Point = P>,
    Poly: Polygon<Contour = C>,
    T: MultiPolygon<Polygon = Poly>,
{
    type Point = P;

    fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        self.polygons().any(|polygon| polygon.contains_point(point))
    }

    fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        Rect::merge_all(
            self.polygons()
                .filter_map(|polygon| CartesianPolygon::bounding_rectangle(polygon)),
        )
    }

    fn intersects<Other, OtherPoly, Q>(&self, other: &Other) -> bool
    where
        Q: CartesianPoint2d<Num = P::Num>,
        Other: MultiPolygon<Polygon = OtherPoly>,
        OtherPoly: Polygon,
        OtherPoly::Contour: Contour<Point = Q>,
    {
        match (
            CartesianMultiPolygon::bounding_rectangle(self),
            CartesianMultiPolygon::bounding_rectangle(other),
        ) {
            (Some(a), Some(b)) if a.intersects(&b) => {}
            _ => return false,
        }

        self.polygons()
            .any(|a| other.polygons().any(|b| a.intersects(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{ClosedContour, MultiPolygon, Polygon};
    use crate::Point2d;

    fn square(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Polygon<Point2d> {
        ClosedContour::new(vec![
            Point2d::new(x_min, y_min),
            Point2d::new(x_min, y_max),
            Point2d::new(x_max, y_max),
            Point2d::new(x_max, y_min),
        ])
        .into()
    }

    #[test]
    fn any_part_intersects() {
        let islands = MultiPolygon::from(vec![
            square(0.0, 0.0, 1.0, 1.0),
            square(100.0, 100.0, 101.0, 101.0),
        ]);
        let sheet = MultiPolygon::from(vec![square(99.0, 99.0, 100.5, 100.5)]);
        let between = MultiPolygon::from(vec![square(40.0, 40.0, 60.0, 60.0)]);

        assert!(islands.intersects(&sheet));
        assert!(sheet.intersects(&islands));
        assert!(!islands.intersects(&between));
    }

    #[test]
    fn contains_point() {
        let islands = MultiPolygon::from(vec![
            square(0.0, 0.0, 1.0, 1.0),
            square(100.0, 100.0, 101.0, 101.0),
        ]);
        assert!(islands.contains_point(&Point2d::new(0.5, 0.5)));
        assert!(islands.contains_point(&Point2d::new(101.0, 100.5)));
        assert!(!islands.contains_point(&Point2d::new(50.0, 50.0)));
    }

    #[test]
    fn bounding_rectangle() {
        let islands = MultiPolygon::from(vec![
            square(0.0, 0.0, 1.0, 1.0),
            square(100.0, 100.0, 101.0, 101.0),
        ]);
        assert_eq!(
            islands.bounding_rectangle(),
            Some(Rect::new(0.0, 0.0, 101.0, 101.0))
        );
        assert_eq!(MultiPolygon::<Point2d>::from(vec![]).bounding_rectangle(), None);
    }

    #[test]
    fn empty_multipolygon_intersects_nothing() {
        let empty = MultiPolygon::<Point2d>::from(vec![]);
        let sheet = MultiPolygon::from(vec![square(0.0, 0.0, 1.0, 1.0)]);
        assert!(!empty.intersects(&sheet));
        assert!(!sheet.intersects(&empty));
    }
}
