pub mod advice;
pub mod health;
pub mod quote;
pub mod search;

use serde::Serialize;

use crate::protocol::{
    HomeAdviceParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestQuoteParams,
    SearchProfessionalsParams, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::state::ServerState;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, state: &ServerState) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "angi-mcp-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": "search_professionals",
                        "title": "Search Angi Professionals",
                        "description": "Search for verified home service professionals on Angi by service category and zip code. \
                                        Returns a ranked list of pros with ratings, availability, pricing, and contact info. \
                                        Use this when a homeowner wants to find, hire, or get a quote from a service professional.",
                        "inputSchema": schema::search_professionals_schema(),
                        "annotations": { "readOnlyHint": true, "openWorldHint": false }
                    },
                    {
                        "name": "get_home_advice",
                        "title": "Get Home Improvement Advice",
                        "description": "Answer homeowner questions about home improvement, repairs, maintenance, and renovation. \
                                        Provides expert advice including DIY guidance, cost estimates, and when to hire a professional. \
                                        Use for questions like 'how do I fix a leaky faucet', 'how much does a roof repair cost', etc.",
                        "inputSchema": schema::home_advice_schema(),
                        "annotations": { "readOnlyHint": true, "openWorldHint": false }
                    },
                    {
                        "name": "request_quote",
                        "title": "Request a Quote from a Professional",
                        "description": "Submit a quote request to a specific Angi professional. Connects the homeowner with the pro \
                                        and initiates the lead/booking process. Requires the professional's ID from search_professionals.",
                        "inputSchema": schema::request_quote_schema()
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            match dispatch_tool_call(&params, state).await {
                Ok(tool_result) => {
                    let result_json = match serde_json::to_value(&tool_result) {
                        Ok(v) => v,
                        Err(e) => {
                            eprintln!("Tool result serialization failed: {e}");
                            return Some(JsonRpcResponse::error(
                                req.id.clone(),
                                JsonRpcError::internal_error("Internal error"),
                            ));
                        }
                    };
                    Some(JsonRpcResponse::success(req.id.clone(), result_json))
                }
                Err(rpc_err) => Some(JsonRpcResponse::error(req.id.clone(), rpc_err)),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Route a `tools/call` to its handler.
///
/// Arguments are checked against the tool's declared schema before any
/// matching logic runs; a failed check is a protocol error (`Err`), never a
/// success-shaped payload. Handlers themselves only return `Err` for
/// internal faults during response construction.
pub async fn dispatch_tool_call(
    params: &ToolCallParams,
    state: &ServerState,
) -> Result<ToolResult, JsonRpcError> {
    let tool = params.name.as_str();

    let schema_json = match schema::schema_for_tool(tool) {
        Some(s) => s,
        None => return Ok(ToolResult::error(format!("Unknown tool: {tool}"))),
    };

    let args = params
        .arguments
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));
    schema::validate_arguments(tool, &schema_json, &args)?;

    match tool {
        "search_professionals" => {
            let search_params: SearchProfessionalsParams = typed_arguments(tool, args)?;
            search::handle(search_params, state).await
        }

        "get_home_advice" => {
            let advice_params: HomeAdviceParams = typed_arguments(tool, args)?;
            advice::handle(advice_params, state).await
        }

        "request_quote" => {
            let quote_params: RequestQuoteParams = typed_arguments(tool, args)?;
            quote::handle(quote_params, state).await
        }

        "health" => health::handle().await,

        _ => Ok(ToolResult::error(format!("Unknown tool: {tool}"))),
    }
}

/// Deserialize schema-accepted arguments into their typed form, applying
/// defaults. A failure here means schema and types disagree — still a
/// parameter error from the caller's perspective.
fn typed_arguments<T: serde::de::DeserializeOwned>(
    tool: &str,
    args: serde_json::Value,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(args)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments for {tool}: {e}")))
}

/// Serialize a handler payload into a single-text-block tool result.
pub(crate) fn tool_payload<T: Serialize>(payload: &T) -> Result<ToolResult, JsonRpcError> {
    match serde_json::to_string(payload) {
        Ok(json) => Ok(ToolResult::text(json)),
        Err(e) => {
            eprintln!("Serialization failed: {e}");
            Err(JsonRpcError::internal_error("Internal error"))
        }
    }
}
