//! Kaartblad selects the map sheets of a tiled elevation dataset that cover a place.
//!
//! The typical flow for one user search:
//!
//! 1. load the sheet index once per session with [`Catalog::from_geojson_str`],
//! 2. turn the boundary of the selected place into a [`Boundary`] (for example [`Boundary::from_wkt`] with the
//!    `geometrie_rd` field of a locatieserver lookup),
//! 3. call [`Catalog::select`] to get a [`TileSelection`] with the intersecting sheets, their [`AggregateSummary`]
//!    and the export helpers (download URL list, file names).
//!
//! Everything here is pure and synchronous. The crate never fetches data and owns no state between calls: the caller
//! keeps the current [`TileSelection`] and replaces it on every search.
//!
//! ```no_run
//! use kaartblad::{Boundary, Catalog, CatalogOptions};
//!
//! # fn main() -> Result<(), kaartblad::error::KaartbladError> {
//! let catalog = Catalog::from_geojson_str(
//!     &std::fs::read_to_string("kaartbladindex.json").unwrap_or_default(),
//!     &CatalogOptions::default(),
//! )?;
//! let boundary = Boundary::from_wkt("POLYGON((120000 480000,125000 480000,125000 485000,120000 480000))", catalog.crs())?;
//! let selection = catalog.select(&boundary)?;
//! println!("{}", selection.info_text());
//! print!("{}", selection.url_list());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod boundary;
mod catalog;
pub mod error;
mod filter;
mod human_size;
mod selection;
mod summary;
mod tile;

pub use boundary::Boundary;
pub use catalog::{Catalog, CatalogOptions};
pub use filter::{filter_tiles, FilterResult};
pub use human_size::{human_file_size, human_file_size_with_precision, SizeUnits, DEFAULT_DECIMALS};
pub use selection::TileSelection;
pub use summary::{summarize, AggregateSummary};
pub use tile::TileFeature;

pub use kaartblad_types;
pub use kaartblad_types::geo::Crs;
