//! Declarative input contracts for the tools.
//!
//! Each tool declares one JSON Schema (draft 2020-12) that is advertised
//! verbatim in `tools/list` and enforced by [`validate_arguments`] before any
//! matching logic runs. Validation never partially applies: either the whole
//! argument object is accepted, or the call fails with every violation listed.

use jsonschema::validator_for;
use serde_json::{json, Value};

/// A schema-validation failure for one tool call.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Invalid arguments for {tool}: {}", .violations.join("; "))]
    Invalid {
        tool: String,
        violations: Vec<String>,
    },
}

/// Validate raw tool arguments against a tool's declared input schema.
///
/// Returns `Ok(())` if valid; otherwise every violating field is reported,
/// prefixed with its JSON pointer where one exists.
pub fn validate_arguments(tool: &str, schema: &Value, args: &Value) -> Result<(), ValidationError> {
    let validator =
        validator_for(schema).map_err(|e| ValidationError::SchemaCompile(e.to_string()))?;

    let violations: Vec<String> = validator
        .iter_errors(args)
        .map(|err| {
            let path = err.instance_path().to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{path}: {err}")
            }
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid {
            tool: tool.to_string(),
            violations,
        })
    }
}

/// Input schema for `search_professionals`.
pub fn search_professionals_schema() -> Value {
    json!({
        "type": "object",
        "required": ["category"],
        "properties": {
            "category": {
                "type": "string",
                "minLength": 1,
                "description": "Service category. Examples: plumbing, electrical, hvac, roofing, cleaning, remodeling"
            },
            "zip_code": {
                "type": "string",
                "description": "5-digit US zip code for the homeowner's location."
            },
            "availability": {
                "type": "string",
                "enum": ["any", "available_now", "available_this_week"],
                "default": "any",
                "description": "Filter by availability. Use 'available_now' for urgent needs."
            },
            "max_results": {
                "type": "integer",
                "minimum": 1,
                "maximum": 5,
                "default": 3,
                "description": "Maximum number of results to return (1-5)."
            }
        }
    })
}

/// Input schema for `get_home_advice`.
pub fn home_advice_schema() -> Value {
    json!({
        "type": "object",
        "required": ["question"],
        "properties": {
            "question": {
                "type": "string",
                "minLength": 1,
                "description": "The homeowner's question about home improvement, repair, or renovation."
            }
        }
    })
}

/// Input schema for `request_quote`.
pub fn request_quote_schema() -> Value {
    json!({
        "type": "object",
        "required": [
            "professional_id",
            "service_needed",
            "homeowner_name",
            "homeowner_zip",
            "preferred_timing"
        ],
        "properties": {
            "professional_id": {
                "type": "string",
                "minLength": 1,
                "description": "The professional's ID from search_professionals (e.g. 'pro-001')."
            },
            "service_needed": {
                "type": "string",
                "minLength": 1,
                "description": "Brief description of the service or project needed."
            },
            "homeowner_name": {
                "type": "string",
                "minLength": 1,
                "description": "The homeowner's first and last name."
            },
            "homeowner_zip": {
                "type": "string",
                "minLength": 1,
                "description": "The homeowner's zip code."
            },
            "preferred_timing": {
                "type": "string",
                "enum": [
                    "as_soon_as_possible",
                    "within_a_week",
                    "within_a_month",
                    "just_getting_estimates"
                ],
                "description": "How urgently the homeowner needs the service."
            },
            "notes": {
                "type": "string",
                "description": "Additional project details."
            }
        }
    })
}

/// Look up a tool's input schema by tool name.
pub fn schema_for_tool(name: &str) -> Option<Value> {
    match name {
        "search_professionals" => Some(search_professionals_schema()),
        "get_home_advice" => Some(home_advice_schema()),
        "request_quote" => Some(request_quote_schema()),
        "health" => Some(json!({ "type": "object", "properties": {} })),
        _ => None,
    }
}
