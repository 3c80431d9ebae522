//! Conversion Tools
//!
//! Tool-level wrappers around the conversion core: request/response shapes,
//! logging, and the unit catalog used for discovery.

use serde::{Deserialize, Serialize};

use crate::conversion::{self, Category, ConversionResult, LENGTH_FACTORS};

/// A single conversion request as received from a caller
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Canonical category the request resolved to
    pub category: &'static str,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

/// Run one conversion, echoing the request alongside the result
pub fn convert_units(req: &ConvertRequest) -> ConversionResult<ConvertResponse> {
    let outcome = conversion::convert(&req.category, req.value, &req.from_unit, &req.to_unit);

    match outcome {
        Ok(result) => {
            // convert only succeeds for a recognized category
            let category = Category::from_name(&req.category)
                .map(|c| c.name())
                .unwrap_or_default();
            tracing::debug!(
                category,
                value = req.value,
                from = %req.from_unit,
                to = %req.to_unit,
                result,
                "Converted value"
            );
            Ok(ConvertResponse {
                category,
                value: req.value,
                from_unit: req.from_unit.clone(),
                to_unit: req.to_unit.clone(),
                result,
            })
        }
        Err(e) => {
            tracing::warn!(
                kind = e.kind(),
                category = %req.category,
                from = %req.from_unit,
                to = %req.to_unit,
                "Conversion rejected: {}",
                e
            );
            Err(e)
        }
    }
}

/// A length unit with its scale relative to the meter
#[derive(Debug, Serialize)]
pub struct LengthUnitInfo {
    pub code: &'static str,
    pub meters_per_unit: f64,
}

/// Description of one category for discovery
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub aliases: Vec<&'static str>,
    pub pivot_unit: &'static str,
    pub units: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_factors: Option<Vec<LengthUnitInfo>>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct UnitCatalog {
    pub categories: Vec<CategoryInfo>,
    pub notes: Vec<&'static str>,
}

/// Describe every supported category and its unit codes
pub fn list_units() -> UnitCatalog {
    let categories = Category::ALL
        .iter()
        .map(|category| CategoryInfo {
            name: category.name(),
            aliases: category.aliases().to_vec(),
            pivot_unit: category.pivot_unit(),
            units: category.unit_codes(),
            length_factors: match category {
                Category::Length => Some(
                    LENGTH_FACTORS
                        .iter()
                        .map(|(code, factor)| LengthUnitInfo {
                            code: *code,
                            meters_per_unit: *factor,
                        })
                        .collect(),
                ),
                Category::Temperature => None,
            },
        })
        .collect();

    UnitCatalog {
        categories,
        notes: vec![
            "Category names ignore case and surrounding whitespace",
            "Unit codes ignore case",
            "Values must be finite numbers",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ConversionError;

    fn request(category: &str, value: f64, from: &str, to: &str) -> ConvertRequest {
        ConvertRequest {
            category: category.to_string(),
            value,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    #[test]
    fn test_convert_units_resolves_alias() {
        let resp = convert_units(&request("Temp", 100.0, "C", "F")).unwrap();
        assert_eq!(resp.category, "temperature");
        assert_eq!(resp.result, 212.0);
        assert_eq!(resp.from_unit, "C");
        assert_eq!(resp.to_unit, "F");
    }

    #[test]
    fn test_convert_units_propagates_errors() {
        let err = convert_units(&request("length", 1.0, "m", "zz")).unwrap_err();
        assert_eq!(err.kind(), "unsupported_unit");
        assert!(matches!(
            convert_units(&request("volume", 1.0, "l", "ml")),
            Err(ConversionError::UnsupportedCategory(_))
        ));
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let req: ConvertRequest = serde_json::from_str(
            r#"{"category":"length","value":12,"from_unit":"in","to_unit":"ft"}"#,
        )
        .unwrap();
        let resp = convert_units(&req).unwrap();
        assert!((resp.result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_list_units() {
        let catalog = list_units();
        assert_eq!(catalog.categories.len(), 2);

        let length = &catalog.categories[0];
        assert_eq!(length.name, "length");
        assert_eq!(length.pivot_unit, "m");
        assert_eq!(length.units, vec!["m", "cm", "mm", "km", "in", "ft", "yd"]);
        assert_eq!(length.length_factors.as_ref().map(|f| f.len()), Some(7));

        let temperature = &catalog.categories[1];
        assert_eq!(temperature.name, "temperature");
        assert_eq!(temperature.aliases, vec!["temp", "temperature-celsius"]);
        assert_eq!(temperature.units, vec!["c", "f", "k"]);
        assert!(temperature.length_factors.is_none());
    }

    #[test]
    fn test_catalog_serializes_without_empty_factors() {
        let json = serde_json::to_value(list_units()).unwrap();
        assert!(json["categories"][1].get("length_factors").is_none());
        assert_eq!(json["categories"][0]["length_factors"][0]["code"], "m");
    }
}
