use serde::Serialize;

use crate::dataset::Professional;
use crate::protocol::{JsonRpcError, SearchProfessionalsParams, ToolResult};
use crate::state::ServerState;

use super::tool_payload;

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    success: bool,
    #[serde(rename = "totalFound")]
    total_found: usize,
    #[serde(rename = "searchedCategory")]
    searched_category: &'a str,
    #[serde(rename = "zipCode")]
    zip_code: &'a str,
    professionals: Vec<ProfessionalSummary>,
    #[serde(rename = "ctaMessage")]
    cta_message: &'static str,
}

#[derive(Debug, Serialize)]
struct NoResultsResponse {
    success: bool,
    message: String,
    results: Vec<ProfessionalSummary>,
}

/// One formatted professional in the search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfessionalSummary {
    id: String,
    name: String,
    business_name: String,
    category: String,
    rating: f64,
    review_count: u32,
    years_in_business: u32,
    availability: String,
    hourly_rate: String,
    phone: String,
    bio: String,
    badges: Vec<String>,
    angi_profile_url: String,
}

impl ProfessionalSummary {
    fn from_professional(pro: &Professional, profile_base_url: &str) -> Self {
        Self {
            id: pro.id.clone(),
            name: pro.name.clone(),
            business_name: pro.business_name.clone(),
            category: pro.category.clone(),
            rating: pro.rating,
            review_count: pro.review_count,
            years_in_business: pro.years_in_business,
            availability: pro.availability.human(),
            hourly_rate: pro
                .hourly_rate
                .clone()
                .unwrap_or_else(|| "Contact for pricing".to_string()),
            phone: pro.phone.clone(),
            bio: pro.bio.clone(),
            badges: pro.badges.clone(),
            angi_profile_url: format!("{profile_base_url}/{}", pro.id),
        }
    }
}

/// Handle a `search_professionals` tool call.
///
/// Filters the directory by category, zip, and availability, ranks by
/// rating then review count (descending, stable), and truncates to the
/// requested cap. Zero matches is a business outcome, not an error: the
/// payload carries `success:false` with a broaden-your-search message.
pub async fn handle(
    params: SearchProfessionalsParams,
    state: &ServerState,
) -> Result<ToolResult, JsonRpcError> {
    let normalized_category = params.category.to_lowercase().trim().to_string();

    let mut matches: Vec<&Professional> = state
        .directory
        .professionals
        .iter()
        .filter(|pro| {
            matches_category(pro, &normalized_category)
                && matches_zip(pro, params.zip_code.as_deref())
                && params.availability.matches(pro.availability)
        })
        .collect();

    // Stable sort: ties beyond (rating, review count) keep dataset order.
    matches.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then(b.review_count.cmp(&a.review_count))
    });
    matches.truncate(params.max_results);

    if matches.is_empty() {
        let location = match &params.zip_code {
            Some(zip) => format!(" in zip {zip}"),
            None => String::new(),
        };
        let payload = NoResultsResponse {
            success: false,
            message: format!(
                "No professionals found for \"{}\"{location}. Try broadening your search.",
                params.category
            ),
            results: Vec::new(),
        };
        return tool_payload(&payload);
    }

    let professionals: Vec<ProfessionalSummary> = matches
        .iter()
        .map(|pro| ProfessionalSummary::from_professional(pro, &state.config.profile_base_url))
        .collect();

    let payload = SearchResponse {
        success: true,
        total_found: professionals.len(),
        searched_category: &params.category,
        zip_code: params.zip_code.as_deref().unwrap_or("all areas"),
        professionals,
        cta_message: "Ready to get quotes? Use the request_quote tool to connect with any of these professionals.",
    };
    tool_payload(&payload)
}

/// Bidirectional substring match, intentionally permissive toward plural and
/// synonym variance ("plumber" vs "plumbing"). This also lets short category
/// names cross-match ("hvac" contains "ac") — preserved as-is.
fn matches_category(pro: &Professional, normalized_query: &str) -> bool {
    pro.category.contains(normalized_query)
        || pro
            .sub_categories
            .iter()
            .any(|s| s.contains(normalized_query))
        || normalized_query.contains(&pro.category)
}

fn matches_zip(pro: &Professional, zip: Option<&str>) -> bool {
    match zip {
        None => true,
        Some(z) => pro.zip_codes.iter().any(|code| code == z),
    }
}
