use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::cartesian::{Orientation, Rect};
use crate::contour::Contour;

/// Position of a point relative to an area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointPosition {
    /// The point is strictly inside the area.
    Inside,
    /// The point lies on the border of the area.
    Boundary,
    /// The point is outside the area.
    Outside,
}

/// Contour in 2d cartesian coordinates. This trait is auto-implemented for all illegible types.
pub trait CartesianContour<P: CartesianPoint2d>: Contour<Point = P> {
    /// Locates the `point` relative to the area enclosed by the contour, treating the contour as a closed ring.
    ///
    /// Uses the winding number of the ring around the point, so self-overlapping rings and both ring orientations
    /// are handled.
    fn locate_point<Point>(&self, point: &Point) -> PointPosition
    where
        Self: Sized,
        Point: CartesianPoint2d<Num = P::Num>,
    {
        let mut winding_number = 0i64;
        for segment in self.iter_segments() {
            if segment.contains_point(point) {
                return PointPosition::Boundary;
            }

            let (from, to) = (segment.0, segment.1);
            if from.y() <= point.y() {
                if to.y() > point.y()
                    && Orientation::triplet(from, to, point) == Orientation::Counterclockwise
                {
                    winding_number += 1;
                }
            } else if to.y() <= point.y()
                && Orientation::triplet(from, to, point) == Orientation::Clockwise
            {
                winding_number -= 1;
            }
        }

        if winding_number == 0 {
            PointPosition::Outside
        } else {
            PointPosition::Inside
        }
    }

    /// Bounding rectangle of the contour points. Returns `None` for a contour without points.
    fn bounding_rectangle(&self) -> Option<Rect<P::Num>>
    where
        Self: Sized,
    {
        Rect::from_points(self.iter_points())
    }
}

impl<T: Contour<Point = P>, P: CartesianPoint2d> CartesianContour<P> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::ClosedContour;
    use crate::Point2d;

    fn triangle() -> ClosedContour<Point2d> {
        ClosedContour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 0.0),
        ])
    }

    #[test]
    fn locate_point() {
        let contour = triangle();

        assert_eq!(
            contour.locate_point(&Point2d::new(0.0, 0.0)),
            PointPosition::Boundary
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(0.5, 0.0)),
            PointPosition::Boundary
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(0.5, 0.5)),
            PointPosition::Boundary
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(0.8, 0.1)),
            PointPosition::Inside
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(0.2, 0.3)),
            PointPosition::Outside
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(1.1, 0.0)),
            PointPosition::Outside
        );
        assert_eq!(
            contour.locate_point(&Point2d::new(-2.0, 0.0)),
            PointPosition::Outside
        );
    }

    #[test]
    fn orientation_does_not_matter() {
        let clockwise = triangle();
        let counterclockwise = ClosedContour::new(clockwise.points.iter().rev().copied().collect());

        for point in [Point2d::new(0.8, 0.1), Point2d::new(0.2, 0.3)] {
            assert_eq!(
                clockwise.locate_point(&point),
                counterclockwise.locate_point(&point)
            );
        }
    }

    #[test]
    fn bounding_rectangle() {
        assert_eq!(
            triangle().bounding_rectangle(),
            Some(Rect::new(0.0, 0.0, 1.0, 1.0))
        );
        assert_eq!(ClosedContour::<Point2d>::new(vec![]).bounding_rectangle(), None);
    }
}
