use serde::Serialize;

use crate::dataset::{AdviceEntry, Difficulty};
use crate::protocol::{HomeAdviceParams, JsonRpcError, ToolResult};
use crate::state::ServerState;

use super::tool_payload;

#[derive(Debug, Serialize)]
struct AdviceResponse<'a> {
    success: bool,
    question: &'a str,
    topic: &'a str,
    answer: &'a str,
    #[serde(rename = "estimatedCost")]
    estimated_cost: &'a str,
    difficulty: Difficulty,
    #[serde(rename = "relatedCategories")]
    related_categories: &'a [String],
    #[serde(rename = "suggestedAction")]
    suggested_action: String,
}

#[derive(Debug, Serialize)]
struct NoAdviceResponse<'a> {
    success: bool,
    question: &'a str,
    answer: &'static str,
    #[serde(rename = "relatedCategories")]
    related_categories: Vec<String>,
}

/// Handle a `get_home_advice` tool call.
///
/// Matching is first-match-wins over dataset order, with keyword hits taking
/// strict priority over topic hits. No match is a soft failure pointing the
/// caller at search_professionals.
pub async fn handle(
    params: HomeAdviceParams,
    state: &ServerState,
) -> Result<ToolResult, JsonRpcError> {
    let question = params.question.to_lowercase();

    let best_match = find_advice(&state.directory.advice, &question);

    let entry = match best_match {
        Some(entry) => entry,
        None => {
            let payload = NoAdviceResponse {
                success: false,
                question: &params.question,
                answer: "I don't have specific guidance for that question right now. \
                         Use search_professionals to find a local expert for a free estimate.",
                related_categories: Vec::new(),
            };
            return tool_payload(&payload);
        }
    };

    let payload = AdviceResponse {
        success: true,
        question: &params.question,
        topic: &entry.topic,
        answer: &entry.answer,
        estimated_cost: entry
            .estimated_cost
            .as_deref()
            .unwrap_or("Varies -- get quotes"),
        difficulty: entry.difficulty,
        related_categories: &entry.related_categories,
        suggested_action: suggested_action(entry),
    };
    tool_payload(&payload)
}

/// Ordered fallback chain: (1) first entry with a keyword substring hit,
/// (2) first entry whose topic appears in the question, (3) none.
fn find_advice<'a>(advice: &'a [AdviceEntry], question: &str) -> Option<&'a AdviceEntry> {
    advice
        .iter()
        .find(|entry| entry.keywords.iter().any(|kw| question.contains(kw.as_str())))
        .or_else(|| advice.iter().find(|entry| question.contains(entry.topic.as_str())))
}

fn suggested_action(entry: &AdviceEntry) -> String {
    match entry.difficulty {
        Difficulty::HireAPro => format!(
            "This is best left to a professional. Use search_professionals to find a verified {} pro near you.",
            entry.related_categories[0]
        ),
        Difficulty::Diy => "This is a manageable DIY project. See guidance above.".to_string(),
        Difficulty::DiyOrPro => {
            "You can DIY this or hire a pro -- see guidance above.".to_string()
        }
    }
}
