use serde::{Deserialize, Serialize};

/// Number of decimal places used by [`human_file_size`].
pub const DEFAULT_DECIMALS: u8 = 1;

const DECIMAL_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Unit system for rendering byte counts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeUnits {
    /// SI units with base 1000: `kB`, `MB`, `GB`...
    #[default]
    Decimal,
    /// IEC units with base 1024: `KiB`, `MiB`, `GiB`...
    Binary,
}

impl SizeUnits {
    /// Number of bytes in the first unit.
    pub fn base(&self) -> u32 {
        match self {
            SizeUnits::Decimal => 1000,
            SizeUnits::Binary => 1024,
        }
    }

    fn names(&self) -> &'static [&'static str] {
        match self {
            SizeUnits::Decimal => &DECIMAL_UNITS,
            SizeUnits::Binary => &BINARY_UNITS,
        }
    }
}

/// Renders a byte count with one decimal place, e.g. `1.5 kB`.
///
/// See [`human_file_size_with_precision`].
pub fn human_file_size(bytes: impl Into<i128>, units: SizeUnits) -> String {
    human_file_size_with_precision(bytes, units, DEFAULT_DECIMALS)
}

/// Renders a byte count in the largest unit that keeps the rounded value below the unit base.
///
/// Counts smaller than the base (in absolute value) are rendered as is: `500 B`. Larger counts are divided by the
/// base until the value rounded to `decimals` places drops below the base, or the largest unit (`YB`/`YiB`) is
/// reached. Rounding is half away from zero.
///
/// ```
/// use kaartblad::{human_file_size, SizeUnits};
///
/// assert_eq!(human_file_size(1500u32, SizeUnits::Decimal), "1.5 kB");
/// assert_eq!(human_file_size(1536u32, SizeUnits::Binary), "1.5 KiB");
/// ```
pub fn human_file_size_with_precision(
    bytes: impl Into<i128>,
    units: SizeUnits,
    decimals: u8,
) -> String {
    let bytes = bytes.into();
    let base = units.base();
    if bytes.unsigned_abs() < base as u128 {
        return format!("{bytes} B");
    }

    let names = units.names();
    let base = base as f64;
    let precision = decimals as usize;
    let factor = 10f64.powi(decimals as i32);
    let round = |value: f64| (value * factor).round() / factor;

    let mut value = bytes as f64 / base;
    let mut unit = 0;
    while round(value.abs()) >= base && unit < names.len() - 1 {
        value /= base;
        unit += 1;
    }

    format!("{:.precision$} {}", round(value), names[unit])
}
