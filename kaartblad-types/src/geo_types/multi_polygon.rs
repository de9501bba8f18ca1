use geo_types::{CoordFloat, CoordNum, Geometry, MultiPolygon, Polygon};

use crate::cartesian::Point2;
use crate::error::GeometryError;

impl<T: CoordNum> crate::multi_polygon::MultiPolygon for MultiPolygon<T> {
    type Polygon = Polygon<T>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl<T: CoordFloat + nalgebra::Scalar> From<&MultiPolygon<T>> for crate::impls::MultiPolygon<Point2<T>> {
    fn from(mp: &MultiPolygon<T>) -> Self {
        let parts: Vec<crate::impls::Polygon<Point2<T>>> =
            mp.0.iter().map(crate::impls::Polygon::from).collect();
        parts.into()
    }
}

impl<T: CoordFloat + nalgebra::Scalar> TryFrom<&Geometry<T>> for crate::impls::MultiPolygon<Point2<T>> {
    type Error = GeometryError;

    fn try_from(geometry: &Geometry<T>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(crate::impls::Polygon::<Point2<T>>::from(polygon).into()),
            Geometry::MultiPolygon(mp) => Ok(mp.into()),
            Geometry::Rect(rect) => Ok(crate::impls::Polygon::<Point2<T>>::from(&rect.to_polygon()).into()),
            Geometry::Triangle(triangle) => {
                Ok(crate::impls::Polygon::<Point2<T>>::from(&triangle.to_polygon()).into())
            }
            _ => Err(GeometryError::Conversion(
                "expected an areal geometry (Polygon or MultiPolygon)".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls;
    use crate::{CartesianMultiPolygon, Point2d};
    use assert_matches::assert_matches;
    use geo_types::{point, polygon};

    #[test]
    fn convert_polygon_with_hole() {
        let polygon: Polygon<f64> = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 10.0, y: 0.0),
                (x: 10.0, y: 10.0),
                (x: 0.0, y: 10.0),
            ],
            interiors: [
                [
                    (x: 2.0, y: 2.0),
                    (x: 4.0, y: 2.0),
                    (x: 4.0, y: 4.0),
                ],
            ],
        );
        let converted = impls::MultiPolygon::<Point2d>::try_from(&Geometry::Polygon(polygon))
            .expect("polygon is areal");
        assert_eq!(converted.parts().len(), 1);
        assert_eq!(converted.parts()[0].outer_contour.points.len(), 4);
        assert_eq!(converted.parts()[0].inner_contours[0].points.len(), 3);
        assert!(converted.contains_point(&Point2d::new(1.0, 1.0)));
        assert!(!converted.contains_point(&Point2d::new(3.5, 2.5)));
    }

    #[test]
    fn point_is_not_areal() {
        let geometry: Geometry<f64> = point!(x: 1.0, y: 2.0).into();
        assert_matches!(
            impls::MultiPolygon::<Point2d>::try_from(&geometry),
            Err(GeometryError::Conversion(_))
        );
    }
}
