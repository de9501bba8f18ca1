//! This example selects the sheets of an elevation sheet index that cover a place.
//!
//! Run it with two arguments: the sheet index (`kaartbladindex.json` of the AHN download service) and a file with
//! the place boundary as RD New WKT, for example the `geometrie_rd` field of a locatieserver lookup response. It
//! prints the number and the total size of the selected sheets, followed by their download URLs.
//!
//! ```shell
//! cargo run --example select_sheets -- kaartbladindex.json utrecht.wkt
//! ```

use anyhow::{anyhow, Result};
use kaartblad::{Catalog, CatalogOptions, SizeUnits};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(index_path), Some(boundary_path), None) = (args.next(), args.next(), args.next()) else {
        return Err(anyhow!(
            "This example must be run with two arguments - the sheet index file and the WKT boundary file"
        ));
    };

    let catalog = Catalog::from_geojson_str(
        &std::fs::read_to_string(index_path)?,
        &CatalogOptions::default(),
    )?;
    let wkt = std::fs::read_to_string(boundary_path)?;

    let selection = kaartblad::TileSelection::from_filter_result(catalog.filter_wkt(&wkt)?);
    log::info!(
        "Selected {} of {} sheets ({})",
        selection.summary().count(),
        catalog.len(),
        selection.summary().human_size(SizeUnits::Binary)
    );

    println!("{}", selection.info_text());
    print!("{}", selection.url_list());

    Ok(())
}
