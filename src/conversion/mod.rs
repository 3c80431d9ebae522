//! Unit conversion module
//!
//! Category dispatch plus the length and temperature conversion rules.

pub mod converter;
pub mod error;
pub mod units;

pub use converter::{convert, convert_length, convert_temperature};
pub use error::{ConversionError, ConversionResult, UnitSide};
pub use units::{meters_per_unit, Category, TemperatureUnit, LENGTH_FACTORS};
