//! Checks that a geometry describes an area.
//!
//! A valid ring has at least three distinct points and only finite coordinates. A valid polygon has valid rings, and
//! a valid multipolygon has at least one part, all of them valid. Self-intersections are not checked.

use num_traits::Float;

use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// Minimum number of distinct points in a polygon ring.
pub const MIN_RING_POINTS: usize = 3;

/// Validates a single polygon ring.
pub fn validate_ring<P, C>(ring: &C) -> Result<(), GeometryError>
where
    P: CartesianPoint2d,
    P::Num: Float,
    C: Contour<Point = P>,
{
    let mut distinct = 0usize;
    let mut prev: Option<&P> = None;
    for point in ring.iter_points() {
        if !point.x().is_finite() || !point.y().is_finite() {
            return Err(GeometryError::Degenerate(
                "ring contains non-finite coordinates".to_string(),
            ));
        }

        if prev.map_or(true, |prev| !prev.equal(point)) {
            distinct += 1;
        }
        prev = Some(point);
    }

    // A repeated first point at the end does not add a vertex.
    if let (Some(first), Some(last)) = (ring.iter_points().next(), prev) {
        if distinct > 1 && first.equal(last) {
            distinct -= 1;
        }
    }

    if distinct < MIN_RING_POINTS {
        return Err(GeometryError::Degenerate(format!(
            "ring has {distinct} distinct points, at least {MIN_RING_POINTS} are required"
        )));
    }

    Ok(())
}

/// Validates the outer and all inner contours of the polygon.
pub fn validate_polygon<P, C, Poly>(polygon: &Poly) -> Result<(), GeometryError>
where
    P: CartesianPoint2d,
    P::Num: Float,
    C: Contour<Point = P>,
    Poly: Polygon<Contour = C>,
{
    polygon.iter_contours().try_for_each(validate_ring)
}

/// Validates all the parts of the multipolygon. A multipolygon without parts is degenerate.
pub fn validate_multi_polygon<P, C, Poly, MP>(multi_polygon: &MP) -> Result<(), GeometryError>
where
    P: CartesianPoint2d,
    P::Num: Float,
    C: Contour<Point = P>,
    Poly: Polygon<Contour = C>,
    MP: MultiPolygon<Polygon = Poly>,
{
    let mut parts = 0usize;
    for polygon in multi_polygon.polygons() {
        validate_polygon(polygon)?;
        parts += 1;
    }

    if parts == 0 {
        return Err(GeometryError::Degenerate(
            "multipolygon has no parts".to_string(),
        ));
    }

    Ok(())
}
