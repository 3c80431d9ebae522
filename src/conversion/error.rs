//! Conversion error types

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::units::Category;

/// Which side of a conversion a unit code was given for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSide {
    Source,
    Target,
}

impl fmt::Display for UnitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSide::Source => f.write_str("source"),
            UnitSide::Target => f.write_str("target"),
        }
    }
}

/// Conversion error types
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    #[error("Value must be a finite number, got {0}")]
    InvalidValue(f64),

    #[error("Unsupported conversion category: {0}")]
    UnsupportedCategory(String),

    #[error("Converted value is too large to represent (input {0})")]
    ResultOutOfRange(f64),

    #[error("Unsupported {category} unit for {side}: {unit}")]
    UnsupportedUnit {
        category: Category,
        side: UnitSide,
        unit: String,
    },
}

impl ConversionError {
    /// Stable machine-readable tag for this error
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidValue(_) => "invalid_value",
            ConversionError::UnsupportedCategory(_) => "unsupported_category",
            ConversionError::ResultOutOfRange(_) => "result_out_of_range",
            ConversionError::UnsupportedUnit { .. } => "unsupported_unit",
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
