//! unitconv MCP Server Implementation
//!
//! Exposes the conversion tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;

use crate::conversion::ConversionError;
use crate::tools::convert::{self, ConvertRequest};
use crate::tools::status::StatusTracker;

/// unitconv MCP Service
#[derive(Clone)]
pub struct UnitConvService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<UnitConvService>,
}

impl UnitConvService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for UnitConvService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Conversion category: "length" or "temperature" (aliases "temp", "temperature-celsius")
    pub category: String,
    /// Value to convert; must be a finite number
    pub value: f64,
    /// Unit the value is expressed in (length: m, cm, mm, km, in, ft, yd; temperature: c, f, k)
    pub from_unit: String,
    /// Unit to convert to, from the same category as from_unit
    pub to_unit: String,
}

impl From<ConvertUnitsParams> for ConvertRequest {
    fn from(p: ConvertUnitsParams) -> Self {
        ConvertRequest {
            category: p.category,
            value: p.value,
            from_unit: p.from_unit,
            to_unit: p.to_unit,
        }
    }
}

/// Map a conversion failure onto an MCP invalid-params error
pub fn conversion_error_to_mcp(e: &ConversionError) -> McpError {
    let data = match e {
        ConversionError::UnsupportedUnit { category, side, unit } => json!({
            "kind": e.kind(),
            "category": category,
            "side": side,
            "unit": unit,
        }),
        ConversionError::UnsupportedCategory(category) => json!({
            "kind": e.kind(),
            "category": category,
        }),
        ConversionError::ResultOutOfRange(value) => json!({
            "kind": e.kind(),
            "value": value,
        }),
        // NaN and infinities have no JSON representation
        ConversionError::InvalidValue(_) => json!({ "kind": e.kind() }),
    };
    McpError::invalid_params(e.to_string(), Some(data))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UnitConvService {
    // --- Status ---

    #[tool(description = "Get the current status of the unitconv service including build info, conversion counters, and process information")]
    async fn unitconv_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let json = to_json(&tracker.get_status())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for using the unit conversion tools: categories, unit codes, examples and error kinds.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a value between units of the same category. Categories: length (m, cm, mm, km, in, ft, yd) and temperature (c, f, k). Category and unit codes are case-insensitive.")]
    async fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let request = ConvertRequest::from(p);
        let outcome = convert::convert_units(&request);

        let mut tracker = self.status_tracker.lock().await;
        match outcome {
            Ok(response) => {
                tracker.record_success();
                let json = to_json(&response)?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => {
                tracker.record_failure();
                Err(conversion_error_to_mcp(&e))
            }
        }
    }

    #[tool(description = "List supported conversion categories, their aliases, pivot units and unit codes")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&convert::list_units())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UnitConvService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unitconv".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Converter - length and temperature conversions. \
                 Call conversion_instructions for usage details. \
                 Convert: convert_units(category, value, from_unit, to_unit). \
                 Discover: list_units. Status: unitconv_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{Category, UnitSide};

    #[test]
    fn test_unsupported_unit_maps_to_invalid_params() {
        let err = ConversionError::UnsupportedUnit {
            category: Category::Temperature,
            side: UnitSide::Source,
            unit: "r".to_string(),
        };
        let mcp = conversion_error_to_mcp(&err);
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp.message, "Unsupported temperature unit for source: r");

        let data = mcp.data.expect("error data");
        assert_eq!(data["kind"], "unsupported_unit");
        assert_eq!(data["side"], "source");
        assert_eq!(data["category"], "temperature");
        assert_eq!(data["unit"], "r");
    }

    #[test]
    fn test_invalid_value_data_has_no_number() {
        let mcp = conversion_error_to_mcp(&ConversionError::InvalidValue(f64::NAN));
        let data = mcp.data.expect("error data");
        assert_eq!(data, json!({ "kind": "invalid_value" }));
    }

    #[test]
    fn test_params_into_request() {
        let params: ConvertUnitsParams = serde_json::from_value(json!({
            "category": "length",
            "value": 1.5,
            "from_unit": "km",
            "to_unit": "m",
        }))
        .unwrap();
        let request = ConvertRequest::from(params);
        let response = convert::convert_units(&request).unwrap();
        assert_eq!(response.result, 1500.0);
    }

    #[tokio::test]
    async fn test_convert_units_tool_updates_counters() {
        let service = UnitConvService::new();
        let ok = ConvertUnitsParams {
            category: "temp".into(),
            value: 0.0,
            from_unit: "c".into(),
            to_unit: "k".into(),
        };
        let bad = ConvertUnitsParams {
            category: "weight".into(),
            value: 1.0,
            from_unit: "kg".into(),
            to_unit: "g".into(),
        };

        assert!(service.convert_units(Parameters(ok)).await.is_ok());
        let err = service.convert_units(Parameters(bad)).await.unwrap_err();
        assert_eq!(err.data.unwrap()["kind"], "unsupported_category");

        let status = service.status_tracker.lock().await.get_status();
        assert_eq!(status.conversions_succeeded, 1);
        assert_eq!(status.conversions_failed, 1);
    }

    #[tokio::test]
    async fn test_convert_units_tool_rejects_overflow() {
        let service = UnitConvService::new();
        let huge = ConvertUnitsParams {
            category: "length".into(),
            value: 1e308,
            from_unit: "km".into(),
            to_unit: "mm".into(),
        };

        let err = service.convert_units(Parameters(huge)).await.unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        let data = err.data.expect("error data");
        assert_eq!(data["kind"], "result_out_of_range");
        assert_eq!(data["value"], 1e308);

        let status = service.status_tracker.lock().await.get_status();
        assert_eq!(status.conversions_succeeded, 0);
        assert_eq!(status.conversions_failed, 1);
    }

    #[test]
    fn test_server_info() {
        let info = UnitConvService::new().get_info();
        assert_eq!(info.server_info.name, "unitconv");
        assert!(info.capabilities.tools.is_some());
    }
}
