use crate::cartesian::CartesianPoint2d;
pub use nalgebra::Point2;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

/// Point in planar coordinates, in the units of its coordinate reference system (meters for RD New).
pub type Point2d = Point2<f64>;

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}
