//! Unit Converter (unitconv) Library
//!
//! Length and temperature conversions, plus the MCP server that exposes them.

pub mod build_info;
pub mod conversion;
pub mod mcp;
pub mod tools;

pub use conversion::{convert, ConversionError, ConversionResult};
