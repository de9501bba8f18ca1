//! Identification of coordinate reference systems.
//!
//! The crate does not reproject geometries. [`Crs`] only lets the caller make sure that two geometries are
//! expressed in the same reference before they are compared.

mod crs;

pub use crs::Crs;
