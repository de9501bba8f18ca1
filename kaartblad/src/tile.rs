use kaartblad_types::cartesian::{CartesianMultiPolygon, Point2d, Rect};
use kaartblad_types::error::GeometryError;
use kaartblad_types::impls::{ClosedContour, MultiPolygon, Polygon};
use kaartblad_types::validation::validate_multi_polygon;
use serde::{Deserialize, Serialize};

/// One map sheet of the catalog.
///
/// The sheet outline is stored as a general multipolygon. Sheets of the published indices are rectangles, but
/// nothing in the crate relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileFeature {
    id: String,
    geometry: MultiPolygon<Point2d>,
    size: String,
    url: String,
}

impl TileFeature {
    /// Creates a new sheet.
    ///
    /// `size` is the declared content length in bytes as it appears in the index. It is kept as text and only
    /// interpreted by [`TileFeature::size_bytes`].
    pub fn new(
        id: impl Into<String>,
        geometry: impl Into<MultiPolygon<Point2d>>,
        size: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            geometry: geometry.into(),
            size: size.into(),
            url: url.into(),
        }
    }

    /// Creates a sheet with a rectangular outline.
    pub fn from_rect(
        id: impl Into<String>,
        rect: Rect,
        size: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let outline = ClosedContour::new(vec![
            Point2d::new(rect.x_min, rect.y_min),
            Point2d::new(rect.x_min, rect.y_max),
            Point2d::new(rect.x_max, rect.y_max),
            Point2d::new(rect.x_max, rect.y_min),
        ]);

        Self::new(id, Polygon::from(outline), size, url)
    }

    /// Identifier of the sheet.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Outline of the sheet.
    pub fn geometry(&self) -> &MultiPolygon<Point2d> {
        &self.geometry
    }

    /// Declared size field exactly as it was given.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Declared size in bytes, or `None` if the size field is not a non-negative base-10 integer.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.trim().parse().ok()
    }

    /// Download URL of the sheet.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Name of the downloaded file: the last path segment of the URL.
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }

    /// Bounding rectangle of the sheet outline, `None` if the outline has no points.
    pub fn extent(&self) -> Option<Rect> {
        self.geometry.bounding_rectangle()
    }

    /// Checks that the outline describes an area.
    pub fn validate(&self) -> Result<(), GeometryError> {
        validate_multi_polygon(&self.geometry)
    }

    /// Returns true if the outline passes [`TileFeature::validate`].
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sheet(size: &str) -> TileFeature {
        TileFeature::from_rect(
            "37EN2",
            Rect::new(120000.0, 481250.0, 125000.0, 487500.0),
            size,
            "https://service.pdok.nl/rws/ahn/atom/downloads/dtm_05m/M_37EN2.tif",
        )
    }

    #[test]
    fn size_bytes() {
        assert_eq!(sheet("1000").size_bytes(), Some(1000));
        assert_eq!(sheet(" 42 ").size_bytes(), Some(42));
        assert_eq!(sheet("abc").size_bytes(), None);
        assert_eq!(sheet("-5").size_bytes(), None);
        assert_eq!(sheet("").size_bytes(), None);
        assert_eq!(sheet("12.5").size_bytes(), None);
    }

    #[test]
    fn file_name() {
        assert_eq!(sheet("1").file_name(), "M_37EN2.tif");

        let no_path = TileFeature::from_rect("x", Rect::new(0.0, 0.0, 1.0, 1.0), "1", "M_01.tif");
        assert_eq!(no_path.file_name(), "M_01.tif");
    }

    #[test]
    fn extent_and_validation() {
        let tile = sheet("1");
        assert_eq!(
            tile.extent(),
            Some(Rect::new(120000.0, 481250.0, 125000.0, 487500.0))
        );
        assert_eq!(tile.validate(), Ok(()));
        assert!(tile.is_well_formed());

        let empty = TileFeature::new("empty", MultiPolygon::<Point2d>::from(vec![]), "1", "u");
        assert_eq!(empty.extent(), None);
        assert_matches!(empty.validate(), Err(GeometryError::Degenerate(_)));
        assert!(!empty.is_well_formed());
    }
}
