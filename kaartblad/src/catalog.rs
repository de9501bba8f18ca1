use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, JsonValue};
use serde_json::Number;
use kaartblad_types::cartesian::Point2d;
use kaartblad_types::geo::Crs;
use kaartblad_types::impls::MultiPolygon;
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::error::KaartbladError;
use crate::filter::{filter_tiles, FilterResult};
use crate::selection::TileSelection;
use crate::tile::TileFeature;

/// Names of the feature properties a sheet index is read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Property with the sheet identifier. If a feature does not have it, the GeoJSON feature `id` is used.
    pub id_property: String,
    /// Property with the download URL.
    pub url_property: String,
    /// Property with the declared size in bytes.
    pub size_property: String,
    /// Reference system of the index if the document does not name one.
    pub default_crs: Crs,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            id_property: "kaartbladNr".to_string(),
            url_property: "url".to_string(),
            size_property: "length".to_string(),
            default_crs: Crs::RD_NEW,
        }
    }
}

/// Ordered collection of all the sheets of a dataset.
///
/// A catalog is loaded once and is not changed afterwards. All its sheets are in the same reference system.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    crs: Crs,
    tiles: Vec<TileFeature>,
}

impl Catalog {
    /// Creates a catalog from the list of sheets in the given reference system.
    pub fn new(tiles: Vec<TileFeature>, crs: Crs) -> Self {
        Self { crs, tiles }
    }

    /// Reads a sheet index GeoJSON document.
    pub fn from_geojson_str(json: &str, options: &CatalogOptions) -> Result<Self, KaartbladError> {
        Self::from_geojson(json.parse::<GeoJson>()?, options)
    }

    /// Creates a catalog from a parsed GeoJSON document. The document must be a `FeatureCollection`.
    pub fn from_geojson(geojson: GeoJson, options: &CatalogOptions) -> Result<Self, KaartbladError> {
        match geojson {
            GeoJson::FeatureCollection(collection) => {
                Self::from_feature_collection(&collection, options)
            }
            GeoJson::Feature(_) => Err(KaartbladError::Catalog(
                "expected FeatureCollection, got Feature".to_string(),
            )),
            GeoJson::Geometry(_) => Err(KaartbladError::Catalog(
                "expected FeatureCollection, got Geometry".to_string(),
            )),
        }
    }

    /// Creates a catalog from the features of the collection, in their order.
    ///
    /// The reference system is taken from the `crs` member of the collection if there is one. A feature without a
    /// polygon or multipolygon geometry is kept with an empty outline, so the filter skips it.
    pub fn from_feature_collection(
        collection: &FeatureCollection,
        options: &CatalogOptions,
    ) -> Result<Self, KaartbladError> {
        let crs = match &collection.foreign_members {
            Some(members) => match members.get("crs") {
                Some(crs) => parse_crs(crs)?,
                None => options.default_crs,
            },
            None => options.default_crs,
        };

        if !crs.is_planar() {
            log::warn!("Sheet index is in {crs}, which is not a planar reference");
        }

        let tiles: Vec<_> = collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| read_tile(index, feature, options))
            .collect();

        log::info!("Loaded sheet index with {} sheets in {crs}", tiles.len());

        Ok(Self::new(tiles, crs))
    }

    /// Reference system of the sheets.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// All sheets in catalog order.
    pub fn tiles(&self) -> &[TileFeature] {
        &self.tiles
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if the catalog has no sheets.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over the sheets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TileFeature> {
        self.tiles.iter()
    }

    /// Selects the sheets that intersect the `boundary`. See [`filter_tiles`].
    ///
    /// Fails with [`KaartbladError::CrsMismatch`] if the boundary is not in the reference system of the catalog.
    pub fn filter(&self, boundary: &Boundary) -> Result<FilterResult<'_>, KaartbladError> {
        if boundary.crs() != self.crs {
            return Err(KaartbladError::CrsMismatch {
                boundary: boundary.crs(),
                catalog: self.crs,
            });
        }

        let result = filter_tiles(boundary, &self.tiles);
        if result.skipped_candidates() > 0 {
            log::debug!(
                "{} sheets of the index have no usable outline",
                result.skipped_candidates()
            );
        }

        Ok(result)
    }

    /// Parses a WKT boundary in the reference system of the catalog and selects the sheets that intersect it.
    pub fn filter_wkt(&self, wkt: &str) -> Result<FilterResult<'_>, KaartbladError> {
        self.filter(&Boundary::from_wkt(wkt, self.crs)?)
    }

    /// Selects the sheets that intersect the `boundary` and summarizes them.
    pub fn select(&self, boundary: &Boundary) -> Result<TileSelection<'_>, KaartbladError> {
        Ok(TileSelection::from_filter_result(self.filter(boundary)?))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TileFeature;
    type IntoIter = std::slice::Iter<'a, TileFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

fn parse_crs(value: &JsonValue) -> Result<Crs, KaartbladError> {
    let name = value
        .get("properties")
        .and_then(|properties| properties.get("name"))
        .and_then(JsonValue::as_str)
        .ok_or_else(|| KaartbladError::Catalog(format!("crs member has no name: {value}")))?;

    name.parse::<Crs>()
        .map_err(|err| KaartbladError::Catalog(err.to_string()))
}

fn read_tile(index: usize, feature: &Feature, options: &CatalogOptions) -> TileFeature {
    let id = property_text(feature, &options.id_property)
        .or_else(|| match &feature.id {
            Some(Id::String(id)) => Some(id.clone()),
            Some(Id::Number(id)) => Some(id.to_string()),
            None => None,
        })
        .unwrap_or_else(|| index.to_string());

    let geometry = match &feature.geometry {
        Some(geometry) => match MultiPolygon::<Point2d>::try_from(geometry) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("Sheet {id} has an unusable geometry: {err}");
                MultiPolygon::from(Vec::new())
            }
        },
        None => {
            log::warn!("Sheet {id} has no geometry");
            MultiPolygon::from(Vec::new())
        }
    };

    let url = property_text(feature, &options.url_property).unwrap_or_else(|| {
        log::warn!("Sheet {id} has no {} property", options.url_property);
        String::new()
    });
    let size = property_text(feature, &options.size_property).unwrap_or_default();

    TileFeature::new(id, geometry, size, url)
}

fn property_text(feature: &Feature, name: &str) -> Option<String> {
    match feature.property(name)? {
        JsonValue::Null => None,
        JsonValue::String(value) => Some(value.clone()),
        JsonValue::Number(value) => Some(number_text(value)),
        other => Some(other.to_string()),
    }
}

/// Whole numbers written in float notation (`1234.0`, `1.234e3`) are rendered as integers.
fn number_text(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }

    match number.as_f64() {
        Some(value)
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 =>
        {
            (value as u64).to_string()
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use kaartblad_types::cartesian::Rect;
    use serde_json::json;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> JsonValue {
        json!({
            "type": "Polygon",
            "coordinates": [[
                [x_min, y_min], [x_max, y_min], [x_max, y_max], [x_min, y_max], [x_min, y_min]
            ]]
        })
    }

    fn index() -> JsonValue {
        json!({
            "type": "FeatureCollection",
            "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::28992" } },
            "features": [
                {
                    "type": "Feature",
                    "geometry": rect(0.0, 0.0, 10.0, 10.0),
                    "properties": { "kaartbladNr": "A", "url": "https://example.com/dtm/M_A.tif", "length": "1000" }
                },
                {
                    "type": "Feature",
                    "geometry": rect(20.0, 20.0, 30.0, 30.0),
                    "properties": { "kaartbladNr": "B", "url": "https://example.com/dtm/M_B.tif", "length": 2000 }
                },
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": { "kaartbladNr": "C", "url": "https://example.com/dtm/M_C.tif", "length": "5" }
                },
                {
                    "type": "Feature",
                    "id": "D",
                    "geometry": { "type": "Point", "coordinates": [5.0, 5.0] },
                    "properties": { "url": "https://example.com/dtm/M_D.tif" }
                }
            ]
        })
    }

    fn catalog() -> Catalog {
        Catalog::from_geojson_str(&index().to_string(), &CatalogOptions::default())
            .expect("valid index")
    }

    fn ids<'a>(tiles: impl IntoIterator<Item = &'a TileFeature>) -> Vec<&'a str> {
        tiles.into_iter().map(TileFeature::id).collect()
    }

    #[test]
    fn load_index() {
        let catalog = catalog();

        assert_eq!(catalog.crs(), Crs::RD_NEW);
        assert_eq!(catalog.len(), 4);
        assert_eq!(ids(&catalog), vec!["A", "B", "C", "D"]);

        let a = &catalog.tiles()[0];
        assert_eq!(a.url(), "https://example.com/dtm/M_A.tif");
        assert_eq!(a.size_bytes(), Some(1000));
        assert_eq!(a.extent(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        assert_eq!(catalog.tiles()[1].size(), "2000");
        assert!(catalog.tiles()[2].geometry().is_empty());
        assert!(catalog.tiles()[3].geometry().is_empty());
        assert_eq!(catalog.tiles()[3].size_bytes(), None);
    }

    #[test]
    fn identifier_falls_back_to_position() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": {} },
                { "type": "Feature", "id": 17, "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": null }
            ]
        });
        let catalog = Catalog::from_geojson(
            GeoJson::from_json_value(value).expect("valid geojson"),
            &CatalogOptions::default(),
        )
        .expect("valid index");

        assert_eq!(ids(&catalog), vec!["0", "17"]);
        assert_eq!(catalog.tiles()[0].url(), "");
    }

    #[test]
    fn default_crs() {
        let value = json!({ "type": "FeatureCollection", "features": [] });
        let options = CatalogOptions {
            default_crs: Crs::EPSG3857,
            ..Default::default()
        };
        let catalog =
            Catalog::from_geojson_str(&value.to_string(), &options).expect("valid index");

        assert_eq!(catalog.crs(), Crs::EPSG3857);
        assert!(catalog.is_empty());
    }

    #[test]
    fn float_sizes() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": { "length": 1234.0 } },
                { "type": "Feature", "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": { "length": 1.5e3 } },
                { "type": "Feature", "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": { "length": 12.5 } },
                { "type": "Feature", "geometry": rect(0.0, 0.0, 1.0, 1.0), "properties": { "length": -3 } }
            ]
        });
        let catalog = Catalog::from_geojson_str(&value.to_string(), &CatalogOptions::default())
            .expect("valid index");
        let sizes: Vec<_> = catalog.iter().map(TileFeature::size_bytes).collect();

        assert_eq!(catalog.tiles()[0].size(), "1234");
        assert_eq!(sizes, vec![Some(1234), Some(1500), None, None]);
    }

    #[test]
    fn custom_property_names() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": rect(0.0, 0.0, 1.0, 1.0),
                "properties": { "name": "x1", "href": "https://example.com/x1.laz", "bytes": 12 }
            }]
        });
        let options: CatalogOptions =
            serde_json::from_value(json!({ "id_property": "name", "url_property": "href", "size_property": "bytes" }))
                .expect("valid options");
        assert_eq!(options.default_crs, Crs::RD_NEW);

        let catalog =
            Catalog::from_geojson_str(&value.to_string(), &options).expect("valid index");
        let tile = &catalog.tiles()[0];
        assert_eq!(tile.id(), "x1");
        assert_eq!(tile.file_name(), "x1.laz");
        assert_eq!(tile.size_bytes(), Some(12));
    }

    #[test]
    fn invalid_documents() {
        let options = CatalogOptions::default();
        assert_matches!(
            Catalog::from_geojson_str("not json", &options),
            Err(KaartbladError::GeoJson(_))
        );
        assert_matches!(
            Catalog::from_geojson_str(&rect(0.0, 0.0, 1.0, 1.0).to_string(), &options),
            Err(KaartbladError::Catalog(_))
        );

        let unknown_crs = json!({
            "type": "FeatureCollection",
            "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:OGC:1.3:CRS84" } },
            "features": []
        });
        assert_matches!(
            Catalog::from_geojson_str(&unknown_crs.to_string(), &options),
            Err(KaartbladError::Catalog(_))
        );
    }

    #[test]
    fn filter() {
        let catalog = catalog();
        let boundary = Boundary::from_wkt("POLYGON((5 5,15 5,15 15,5 15,5 5))", Crs::RD_NEW)
            .expect("valid boundary");

        let result = catalog.filter(&boundary).expect("same crs");
        assert_eq!(ids(&result), vec!["A"]);
        assert_eq!(result.skipped_candidates(), 2);

        let touching = catalog
            .filter_wkt("POLYGON((15 20,20 20,20 25,15 25,15 20))")
            .expect("valid boundary");
        assert_eq!(ids(&touching), vec!["B"]);
    }

    #[test]
    fn filter_errors() {
        let catalog = catalog();
        let boundary = Boundary::from_wkt("POLYGON((5 5,15 5,15 15,5 15,5 5))", Crs::EPSG3857)
            .expect("valid boundary");

        assert_matches!(
            catalog.filter(&boundary),
            Err(KaartbladError::CrsMismatch {
                boundary: Crs::EPSG3857,
                catalog: Crs::RD_NEW
            })
        );
        assert_matches!(
            catalog.filter_wkt("POLYGON((0 0,1 1,0 0))"),
            Err(KaartbladError::InvalidGeometry(_))
        );
    }

    #[test]
    fn select() {
        let catalog = catalog();
        let boundary = Boundary::from_wkt(
            "MULTIPOLYGON(((5 5,15 5,15 15,5 15,5 5)),((25 25,35 25,35 35,25 25)))",
            Crs::RD_NEW,
        )
        .expect("valid boundary");

        let selection = catalog.select(&boundary).expect("same crs");
        assert_eq!(selection.summary().count(), 2);
        assert_eq!(selection.summary().total_size(), 3000);
        assert_eq!(selection.info_text(), "2 kaartbladen\n3.0 kB");
    }
}
