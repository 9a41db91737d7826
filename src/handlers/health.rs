use crate::protocol::{JsonRpcError, ToolResult};

use super::tool_payload;

/// Health check: static status payload.
pub async fn handle() -> Result<ToolResult, JsonRpcError> {
    tool_payload(&serde_json::json!({
        "status": "ok",
        "server": "angi-mcp",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
