use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::cartesian::traits::contour::{CartesianContour, PointPosition};
use crate::cartesian::Rect;
use crate::contour::Contour;
use crate::polygon::Polygon;

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all illegible types.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d;

    /// Locates the `point` relative to the polygon area. A point inside a hole is outside of the polygon, and a point
    /// on the border of a hole lies on the polygon boundary.
    fn locate_point<P>(&self, point: &P) -> PointPosition
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;

    /// Returns true if the `point` lies inside or on one of the polygon's sides.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>,
    {
        self.locate_point(point) != PointPosition::Outside
    }

    /// Bounding rectangle of the outer contour. Returns `None` if the outer contour has no points.
    fn bounding_rectangle(&self) -> Option<Rect<<Self::Point as CartesianPoint2d>::Num>>;

    /// Returns true if the polygons have at least one common point.
    ///
    /// Polygons that only touch each other by an edge or a vertex intersect. The check goes from cheap to expensive:
    /// bounding rectangles, then pairwise edge intersections, then containment of one polygon in the other.
    fn intersects<Other, Q>(&self, other: &Other) -> bool
    where
        Q: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>,
        Other: Polygon,
        Other::Contour: Contour<Point = Q>;
}

impl<P, C, T> CartesianPolygon for T
where
    P: CartesianPoint2d,
    C: Contour<Point = P>,
    T: Polygon<Contour = C>,
{
    type Point = P;

    fn locate_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> PointPosition {
        match self.outer_contour().locate_point(point) {
            PointPosition::Inside => {}
            position => return position,
        }

        for hole in self.inner_contours() {
            match hole.locate_point(point) {
                PointPosition::Inside => return PointPosition::Outside,
                PointPosition::Boundary => return PointPosition::Boundary,
                PointPosition::Outside => {}
            }
        }

        PointPosition::Inside
    }

    fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        CartesianContour::bounding_rectangle(self.outer_contour())
    }

    fn intersects<Other, Q>(&self, other: &Other) -> bool
    where
        Q: CartesianPoint2d<Num = P::Num>,
        Other: Polygon,
        Other::Contour: Contour<Point = Q>,
    {
        match (
            CartesianPolygon::bounding_rectangle(self),
            CartesianContour::bounding_rectangle(other.outer_contour()),
        ) {
            (Some(a), Some(b)) if a.intersects(&b) => {}
            _ => return false,
        }

        let edges_intersect = self
            .iter_segments()
            .any(|a| other.iter_segments().any(|b| a.intersects(&b)));
        if edges_intersect {
            return true;
        }

        // No edges cross, so each polygon is either completely inside the other one or apart from it. Checking one
        // vertex of every outer contour is enough.
        if let Some(point) = other.outer_contour().iter_points().next() {
            if self.contains_point(point) {
                return true;
            }
        }

        match self.outer_contour().iter_points().next() {
            Some(point) => other.contains_point(point),
            None => false,
        }
    }
}
