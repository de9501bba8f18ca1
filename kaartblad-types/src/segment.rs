//! Straight line segments between two points and their intersection test.

use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Returns true if the `point` lies on the segment, including its endpoints.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        Orientation::triplet(self.0, point, self.1) == Orientation::Collinear
            && within_span(self.0, point, self.1)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2
            && o3 != o4
            && o1 != Orientation::Collinear
            && o2 != Orientation::Collinear
            && o3 != Orientation::Collinear
            && o4 != Orientation::Collinear
        {
            return true;
        }

        (o1 == Orientation::Collinear && within_span(self.0, other.0, self.1))
            || (o2 == Orientation::Collinear && within_span(self.0, other.1, self.1))
            || (o3 == Orientation::Collinear && within_span(other.0, self.0, other.1))
            || (o4 == Orientation::Collinear && within_span(other.0, self.1, other.1))
    }
}

/// Checks whether `q` lies inside the bounding box of the `p`-`r` segment.
fn within_span<Num: num_traits::Num + PartialOrd + Copy>(
    p: &impl CartesianPoint2d<Num = Num>,
    q: &impl CartesianPoint2d<Num = Num>,
    r: &impl CartesianPoint2d<Num = Num>,
) -> bool {
    let (x_min, x_max) = if p.x() <= r.x() {
        (p.x(), r.x())
    } else {
        (r.x(), p.x())
    };
    let (y_min, y_max) = if p.y() <= r.y() {
        (p.y(), r.y())
    } else {
        (r.y(), p.y())
    };

    q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2d;

    fn seg<'a>(points: &'a [Point2d; 2]) -> Segment<'a, Point2d> {
        Segment(&points[0], &points[1])
    }

    #[test]
    fn crossing_segments_intersect() {
        let a = [Point2d::new(0.0, 0.0), Point2d::new(2.0, 2.0)];
        let b = [Point2d::new(0.0, 2.0), Point2d::new(2.0, 0.0)];
        assert!(seg(&a).intersects(&seg(&b)));
        assert!(seg(&b).intersects(&seg(&a)));
    }

    #[test]
    fn touching_endpoint_intersects() {
        let a = [Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)];
        let b = [Point2d::new(1.0, 0.0), Point2d::new(1.0, 5.0)];
        assert!(seg(&a).intersects(&seg(&b)));

        let t = [Point2d::new(0.5, 0.0), Point2d::new(0.5, 3.0)];
        assert!(seg(&a).intersects(&seg(&t)));
    }

    #[test]
    fn collinear_segments() {
        let a = [Point2d::new(0.0, 0.0), Point2d::new(2.0, 0.0)];
        let overlapping = [Point2d::new(1.0, 0.0), Point2d::new(3.0, 0.0)];
        let apart = [Point2d::new(2.5, 0.0), Point2d::new(3.0, 0.0)];
        assert!(seg(&a).intersects(&seg(&overlapping)));
        assert!(!seg(&a).intersects(&seg(&apart)));

        let vertical = [Point2d::new(0.0, 0.0), Point2d::new(0.0, 2.0)];
        let vertical_apart = [Point2d::new(0.0, 3.0), Point2d::new(0.0, 4.0)];
        assert!(!seg(&vertical).intersects(&seg(&vertical_apart)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = [Point2d::new(0.0, 0.0), Point2d::new(2.0, 0.0)];
        let b = [Point2d::new(0.0, 1.0), Point2d::new(2.0, 1.0)];
        assert!(!seg(&a).intersects(&seg(&b)));
    }

    #[test]
    fn contains_point() {
        let a = [Point2d::new(0.0, 0.0), Point2d::new(2.0, 2.0)];
        assert!(seg(&a).contains_point(&Point2d::new(1.0, 1.0)));
        assert!(seg(&a).contains_point(&Point2d::new(2.0, 2.0)));
        assert!(!seg(&a).contains_point(&Point2d::new(3.0, 3.0)));
        assert!(!seg(&a).contains_point(&Point2d::new(1.0, 0.0)));
    }
}
