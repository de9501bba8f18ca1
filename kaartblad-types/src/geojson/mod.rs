//! Conversion of GeoJSON geometries into [`impls`](crate::impls) geometries.
//!
//! Only areal geometries are supported: `Polygon` and `MultiPolygon` values are converted into a
//! [`MultiPolygon`], everything else is a [`GeometryError::Conversion`] error. The coordinates are copied as they
//! are, GeoJSON's "always WGS84" rule is not enforced since map sheet indices are published in national planar
//! references.

use geojson::{LineStringType, PolygonType, Position, Value};

use crate::cartesian::Point2d;
use crate::error::GeometryError;
use crate::impls::{ClosedContour, Contour, MultiPolygon, Polygon};

impl TryFrom<&geojson::Geometry> for MultiPolygon<Point2d> {
    type Error = GeometryError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&geometry.value)
    }
}

impl TryFrom<&Value> for MultiPolygon<Point2d> {
    type Error = GeometryError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Polygon(polygon) => Ok(MultiPolygon::from(convert_polygon(polygon)?)),
            Value::MultiPolygon(mp) => convert_multi_polygon(mp),
            other => Err(GeometryError::Conversion(format!(
                "expected Polygon or MultiPolygon, got {}",
                type_name(other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn convert_point(position: &Position) -> Result<Point2d, GeometryError> {
    match position.as_slice() {
        [x, y, ..] => Ok(Point2d::new(*x, *y)),
        _ => Err(GeometryError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_contour(line_string: &LineStringType) -> Result<Contour<Point2d>, GeometryError> {
    let is_closed = !line_string.is_empty() && line_string.first() == line_string.last();
    let mut points = line_string
        .iter()
        .map(convert_point)
        .collect::<Result<Vec<_>, _>>()?;
    if is_closed && points.len() > 1 {
        points.pop();
    }

    Ok(Contour::new(points, is_closed))
}

fn convert_ring(line_string: &LineStringType) -> Result<ClosedContour<Point2d>, GeometryError> {
    convert_contour(line_string)?
        .into_closed()
        .ok_or_else(|| GeometryError::Conversion("polygon ring is not closed".to_string()))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<Point2d>, GeometryError> {
    let (outer, inner) = polygon
        .split_first()
        .ok_or_else(|| GeometryError::Conversion("polygon has no rings".to_string()))?;

    Ok(Polygon::new(
        convert_ring(outer)?,
        inner
            .iter()
            .map(convert_ring)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_multi_polygon(mp: &[PolygonType]) -> Result<MultiPolygon<Point2d>, GeometryError> {
    Ok(MultiPolygon::from(
        mp.iter()
            .map(convert_polygon)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}
