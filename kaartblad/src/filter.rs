use crate::boundary::Boundary;
use crate::tile::TileFeature;

/// Sheets selected by [`filter_tiles`], in the order of the candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult<'a> {
    tiles: Vec<&'a TileFeature>,
    skipped_candidates: usize,
}

impl<'a> FilterResult<'a> {
    /// Result with no sheets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selected sheets.
    pub fn tiles(&self) -> &[&'a TileFeature] {
        &self.tiles
    }

    /// Iterates over the selected sheets.
    pub fn iter(&self) -> impl Iterator<Item = &'a TileFeature> + '_ {
        self.tiles.iter().copied()
    }

    /// Number of selected sheets.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if no sheet was selected.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of candidates that were not tested because their outline does not describe an area.
    pub fn skipped_candidates(&self) -> usize {
        self.skipped_candidates
    }
}

impl<'a> IntoIterator for FilterResult<'a> {
    type Item = &'a TileFeature;
    type IntoIter = std::vec::IntoIter<&'a TileFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b FilterResult<'a> {
    type Item = &'a TileFeature;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a TileFeature>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter().copied()
    }
}

/// Selects the candidates that have at least one common point with the `boundary`.
///
/// Candidates are tested one by one and the selected ones keep their relative order. Touching the boundary by an
/// edge or a vertex is enough to be selected. A candidate with an outline that does not describe an area is
/// skipped and counted in [`FilterResult::skipped_candidates`], the rest of the scan continues.
///
/// The candidates must be in the reference system of the boundary. Use [`Catalog::filter`](crate::Catalog::filter)
/// to have this checked.
pub fn filter_tiles<'a>(
    boundary: &Boundary,
    candidates: impl IntoIterator<Item = &'a TileFeature>,
) -> FilterResult<'a> {
    let mut result = FilterResult::empty();
    for tile in candidates {
        if let Err(err) = tile.validate() {
            log::debug!("Skipping sheet {}: {err}", tile.id());
            result.skipped_candidates += 1;
            continue;
        }

        if boundary.intersects(tile) {
            result.tiles.push(tile);
        }
    }

    log::trace!(
        "Selected {} sheets, skipped {}",
        result.tiles.len(),
        result.skipped_candidates
    );

    result
}
