//! Conversion functions
//!
//! `convert` validates the value, resolves the category and hands off to the
//! per-category routine. Each routine normalizes through its pivot unit, so a
//! category needs one rule per unit rather than one per pair.

use super::error::{ConversionError, ConversionResult, UnitSide};
use super::units::{meters_per_unit, Category, TemperatureUnit};

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// The value must be finite; this is checked before the category is looked
/// at. Category names ignore case and surrounding whitespace, unit codes
/// ignore case only.
pub fn convert(category: &str, value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    match Category::from_name(category) {
        Some(Category::Length) => convert_length(value, from_unit, to_unit),
        Some(Category::Temperature) => convert_temperature(value, from_unit, to_unit),
        None => Err(ConversionError::UnsupportedCategory(category.to_string())),
    }
}

/// Convert between length units via meters
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    let from_factor = length_factor(from_unit, UnitSide::Source)?;
    let to_factor = length_factor(to_unit, UnitSide::Target)?;

    let meters = value * from_factor;
    finite_result(value, meters / to_factor)
}

/// Convert between temperature scales via Celsius
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    let from = temperature_unit(from_unit, UnitSide::Source)?;
    let to = temperature_unit(to_unit, UnitSide::Target)?;

    let celsius = from.to_celsius(value);
    finite_result(value, to.from_celsius(celsius))
}

/// A finite input can still overflow once scaled; never hand back inf.
fn finite_result(value: f64, result: f64) -> ConversionResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::ResultOutOfRange(value))
    }
}

fn length_factor(unit: &str, side: UnitSide) -> ConversionResult<f64> {
    meters_per_unit(unit).ok_or_else(|| ConversionError::UnsupportedUnit {
        category: Category::Length,
        side,
        unit: unit.to_string(),
    })
}

fn temperature_unit(unit: &str, side: UnitSide) -> ConversionResult<TemperatureUnit> {
    TemperatureUnit::from_code(unit).ok_or_else(|| ConversionError::UnsupportedUnit {
        category: Category::Temperature,
        side,
        unit: unit.to_string(),
    })
}
