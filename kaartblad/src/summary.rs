use serde::{Deserialize, Serialize};

use crate::human_size::{human_file_size, SizeUnits};
use crate::tile::TileFeature;

/// Count and total declared size of a set of sheets.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    count: usize,
    total_size: u64,
    skipped_sizes: usize,
}

impl AggregateSummary {
    /// Number of sheets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of the declared sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of sheets whose size field could not be read. They are counted as 0 bytes in the total.
    pub fn skipped_sizes(&self) -> usize {
        self.skipped_sizes
    }

    /// Total size rendered with [`human_file_size`].
    pub fn human_size(&self, units: SizeUnits) -> String {
        human_file_size(self.total_size, units)
    }
}

/// Counts the sheets and sums their declared sizes.
///
/// A size field that is not a non-negative integer contributes 0 bytes and does not stop the aggregation.
pub fn summarize<'a>(tiles: impl IntoIterator<Item = &'a TileFeature>) -> AggregateSummary {
    let mut summary = AggregateSummary::default();
    for tile in tiles {
        summary.count += 1;
        match tile.size_bytes() {
            Some(size) => summary.total_size = summary.total_size.saturating_add(size),
            None => {
                log::debug!(
                    "Size of sheet {} is not a byte count: {:?}",
                    tile.id(),
                    tile.size()
                );
                summary.skipped_sizes += 1;
            }
        }
    }

    summary
}
