//! Tools module
//!
//! MCP tool implementations for the unit converter.

pub mod convert;
pub mod status;
