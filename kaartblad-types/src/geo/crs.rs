use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Coordinate reference system identified by its EPSG code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs {
    epsg: u32,
}

impl Crs {
    /// Amersfoort / RD New, the Dutch national planar reference system.
    pub const RD_NEW: Crs = Crs { epsg: 28992 };
    /// Geographic longitude/latitude on the WGS84 datum.
    pub const WGS84: Crs = Crs { epsg: 4326 };
    /// Web Mercator projection.
    pub const EPSG3857: Crs = Crs { epsg: 3857 };

    /// Creates a reference with the given EPSG code.
    pub const fn epsg(code: u32) -> Self {
        Self { epsg: code }
    }

    /// EPSG code of the reference.
    pub fn code(&self) -> u32 {
        self.epsg
    }

    /// Returns false for references that use angular (longitude/latitude) coordinates, in which straight-line
    /// geometric tests are not valid.
    pub fn is_planar(&self) -> bool {
        !matches!(self.epsg, 4326 | 4258 | 4289)
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg)
    }
}

impl FromStr for Crs {
    type Err = GeometryError;

    /// Parses `EPSG:28992`, `urn:ogc:def:crs:EPSG::28992` and `http://www.opengis.net/def/crs/EPSG/0/28992` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = if let Some(code) = trimmed.strip_prefix("EPSG:") {
            code
        } else if let Some(rest) = trimmed.strip_prefix("urn:ogc:def:crs:EPSG:") {
            // The version part between the two colons is usually empty.
            rest.rsplit(':').next().unwrap_or(rest)
        } else if let Some(rest) = trimmed
            .strip_prefix("http://www.opengis.net/def/crs/EPSG/")
            .or_else(|| trimmed.strip_prefix("https://www.opengis.net/def/crs/EPSG/"))
        {
            rest.rsplit('/').next().unwrap_or(rest)
        } else {
            return Err(GeometryError::UnknownCrs(s.to_string()));
        };

        code.parse::<u32>()
            .map(Crs::epsg)
            .map_err(|_| GeometryError::UnknownCrs(s.to_string()))
    }
}
