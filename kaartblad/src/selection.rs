use kaartblad_types::cartesian::Rect;

use crate::boundary::Boundary;
use crate::catalog::Catalog;
use crate::error::KaartbladError;
use crate::filter::FilterResult;
use crate::human_size::SizeUnits;
use crate::summary::{summarize, AggregateSummary};
use crate::tile::TileFeature;

/// Result of one search: the selected sheets together with their summary.
///
/// The selection is owned by the caller and is replaced as a whole on every search. The summary is computed once
/// on construction and always matches the sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileSelection<'a> {
    tiles: FilterResult<'a>,
    summary: AggregateSummary,
}

impl<'a> TileSelection<'a> {
    /// Selection with no sheets, the state before the first search.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Summarizes the filter result.
    pub fn from_filter_result(tiles: FilterResult<'a>) -> Self {
        let summary = summarize(&tiles);
        Self { tiles, summary }
    }

    /// Selects the sheets of the `catalog` that intersect the `boundary`.
    pub fn from_boundary(catalog: &'a Catalog, boundary: &Boundary) -> Result<Self, KaartbladError> {
        catalog.select(boundary)
    }

    /// Selected sheets in catalog order.
    pub fn tiles(&self) -> &FilterResult<'a> {
        &self.tiles
    }

    /// Count and size of the selected sheets.
    pub fn summary(&self) -> AggregateSummary {
        self.summary
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Download URLs of the selected sheets, each followed by a line break.
    pub fn url_list(&self) -> String {
        self.tiles.iter().fold(String::new(), |mut list, tile| {
            list.push_str(tile.url());
            list.push('\n');
            list
        })
    }

    /// File names the selected sheets are saved under.
    pub fn download_names(&self) -> Vec<&'a str> {
        self.tiles.iter().map(TileFeature::file_name).collect()
    }

    /// Bounding rectangle of all the selected sheets. `None` if nothing is selected.
    pub fn extent(&self) -> Option<Rect> {
        Rect::merge_all(self.tiles.iter().filter_map(TileFeature::extent))
    }

    /// Short description of the selection: the number of sheets on the first line and their total size on the
    /// second one, e.g. `"2 kaartbladen\n3.0 kB"`.
    pub fn info_text(&self) -> String {
        format!(
            "{} kaartbladen\n{}",
            self.summary.count(),
            self.summary.human_size(SizeUnits::Decimal)
        )
    }
}
