use serde::{Deserialize, Serialize};

use crate::dataset::AvailabilityFilter;

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Arguments for the `search_professionals` tool, after schema validation.
///
/// Defaults (`availability = any`, `max_results = 3`) are applied here during
/// deserialization; range and enum constraints are enforced earlier by the
/// declared schema.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchProfessionalsParams {
    pub category: String,
    pub zip_code: Option<String>,
    #[serde(default)]
    pub availability: AvailabilityFilter,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    3
}

/// Arguments for the `get_home_advice` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeAdviceParams {
    pub question: String,
}

/// How urgently the homeowner needs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredTiming {
    AsSoonAsPossible,
    WithinAWeek,
    WithinAMonth,
    JustGettingEstimates,
}

impl PreferredTiming {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AsSoonAsPossible => "as_soon_as_possible",
            Self::WithinAWeek => "within_a_week",
            Self::WithinAMonth => "within_a_month",
            Self::JustGettingEstimates => "just_getting_estimates",
        }
    }

    /// Human-readable form: underscores replaced with spaces.
    pub fn human(self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// Arguments for the `request_quote` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestQuoteParams {
    pub professional_id: String,
    pub service_needed: String,
    pub homeowner_name: String,
    pub homeowner_zip: String,
    pub preferred_timing: PreferredTiming,
    pub notes: Option<String>,
}
