use serde::Serialize;

use crate::dataset::Availability;
use crate::protocol::{JsonRpcError, RequestQuoteParams, ToolResult};
use crate::state::ServerState;

use super::tool_payload;

#[derive(Debug, Serialize)]
struct QuoteResponse<'a> {
    success: bool,
    #[serde(rename = "leadId")]
    lead_id: String,
    message: String,
    professional: ProfessionalContact<'a>,
    #[serde(rename = "quoteDetails")]
    quote_details: QuoteDetails<'a>,
    #[serde(rename = "nextSteps")]
    next_steps: [String; 4],
    #[serde(rename = "angiTrackingUrl")]
    angi_tracking_url: String,
}

/// Echoed contact summary for the professional receiving the lead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfessionalContact<'a> {
    name: &'a str,
    business_name: &'a str,
    phone: &'a str,
    rating: f64,
    badges: &'a [String],
}

/// Echoed request details, with the timing enum rendered as readable text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDetails<'a> {
    service: &'a str,
    homeowner_name: &'a str,
    zip: &'a str,
    timing: String,
    notes: &'a str,
}

#[derive(Debug, Serialize)]
struct UnknownProfessionalResponse {
    success: bool,
    error: String,
}

/// Handle a `request_quote` tool call.
///
/// Looks up the professional by exact id, mints a lead id, and assembles the
/// confirmation payload. An unknown id is a soft failure naming the id; the
/// lead exists only in the response, nothing is persisted.
pub async fn handle(
    params: RequestQuoteParams,
    state: &ServerState,
) -> Result<ToolResult, JsonRpcError> {
    let pro = match state.directory.professional_by_id(&params.professional_id) {
        Some(p) => p,
        None => {
            let payload = UnknownProfessionalResponse {
                success: false,
                error: format!(
                    "Professional \"{}\" not found. Use search_professionals first.",
                    params.professional_id
                ),
            };
            return tool_payload(&payload);
        }
    };

    let lead_id = state.lead_ids.mint();
    let estimated_response_time = match pro.availability {
        Availability::AvailableNow => "within 1-2 hours",
        Availability::AvailableThisWeek => "within 24 hours",
        Availability::AvailableLater => "within 2-3 business days",
    };

    let payload = QuoteResponse {
        success: true,
        lead_id: lead_id.as_str().to_string(),
        message: format!(
            "Your quote request has been sent to {} at {}!",
            pro.name, pro.business_name
        ),
        professional: ProfessionalContact {
            name: &pro.name,
            business_name: &pro.business_name,
            phone: &pro.phone,
            rating: pro.rating,
            badges: &pro.badges,
        },
        quote_details: QuoteDetails {
            service: &params.service_needed,
            homeowner_name: &params.homeowner_name,
            zip: &params.homeowner_zip,
            timing: params.preferred_timing.human(),
            notes: params.notes.as_deref().unwrap_or("None provided"),
        },
        next_steps: [
            format!("{} should respond {estimated_response_time}.", pro.name),
            "You'll receive a confirmation email from Angi with your lead ID.".to_string(),
            "Track this request at angi.com/my-projects.".to_string(),
            "We recommend getting 2-3 quotes before deciding.".to_string(),
        ],
        angi_tracking_url: lead_id.tracking_url(&state.config.tracking_base_url),
    };
    tool_payload(&payload)
}
