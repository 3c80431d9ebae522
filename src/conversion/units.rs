//! Unit types and conversion constants
//!
//! Static tables for the supported categories. Everything here is read-only
//! data, shared freely between concurrent callers.

use std::fmt;

use serde::Serialize;

/// A conversion domain with its own unit codes and conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Length units, pivoting through meters
    Length,
    /// Temperature scales, pivoting through Celsius
    Temperature,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Length, Category::Temperature];

    /// Resolve a category name. Surrounding whitespace and case are ignored.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Some(Category::Length),
            "temperature" | "temp" | "temperature-celsius" => Some(Category::Temperature),
            _ => None,
        }
    }

    /// Canonical name used in responses
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
        }
    }

    /// Extra names accepted by `from_name` besides the canonical one
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &[],
            Category::Temperature => &["temp", "temperature-celsius"],
        }
    }

    /// Unit every conversion in this category is routed through
    pub fn pivot_unit(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Temperature => "c",
        }
    }

    /// Recognized unit codes, lower case
    pub fn unit_codes(&self) -> Vec<&'static str> {
        match self {
            Category::Length => LENGTH_FACTORS.iter().map(|(code, _)| *code).collect(),
            Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.code()).collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

pub const METERS_PER_CM: f64 = 0.01;
pub const METERS_PER_MM: f64 = 0.001;
pub const METERS_PER_KM: f64 = 1000.0;
/// International inch, exact
pub const METERS_PER_INCH: f64 = 0.0254;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_YARD: f64 = 0.9144;

/// Meters per one of each length unit, keyed by lower-case code
pub const LENGTH_FACTORS: [(&str, f64); 7] = [
    ("m", 1.0),
    ("cm", METERS_PER_CM),
    ("mm", METERS_PER_MM),
    ("km", METERS_PER_KM),
    ("in", METERS_PER_INCH),
    ("ft", METERS_PER_FOOT),
    ("yd", METERS_PER_YARD),
];

/// Get the conversion factor to meters for a length unit code
pub fn meters_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    LENGTH_FACTORS
        .iter()
        .find(|(code, _)| *code == lower)
        .map(|(_, factor)| *factor)
}

// ============================================================================
// Temperature Scales
// ============================================================================

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading at 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Parse a single-letter scale code, case-insensitive
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "c" => Some(TemperatureUnit::Celsius),
            "f" => Some(TemperatureUnit::Fahrenheit),
            "k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "c",
            TemperatureUnit::Fahrenheit => "f",
            TemperatureUnit::Kelvin => "k",
        }
    }

    /// Re-express a reading on this scale in Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Re-express a Celsius reading on this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}
