//! Tests for the declared tool input contracts and the argument validator.

use angi_mcp_server::protocol::SearchProfessionalsParams;
use angi_mcp_server::schema::{
    home_advice_schema, request_quote_schema, schema_for_tool, search_professionals_schema,
    validate_arguments, ValidationError,
};
use serde_json::json;

#[test]
fn search_schema_accepts_minimal_arguments() {
    let schema = search_professionals_schema();
    validate_arguments("search_professionals", &schema, &json!({ "category": "plumbing" }))
        .expect("minimal search arguments must validate");
}

#[test]
fn search_schema_accepts_full_arguments() {
    let schema = search_professionals_schema();
    let args = json!({
        "category": "plumbing",
        "zip_code": "90210",
        "availability": "available_now",
        "max_results": 5
    });
    validate_arguments("search_professionals", &schema, &args)
        .expect("full search arguments must validate");
}

#[test]
fn search_schema_rejects_empty_category() {
    let schema = search_professionals_schema();
    let err = validate_arguments("search_professionals", &schema, &json!({ "category": "" }))
        .unwrap_err();
    match err {
        ValidationError::Invalid { violations, .. } => {
            assert!(violations.iter().any(|v| v.contains("/category")));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn search_schema_enumerates_every_violation() {
    let schema = search_professionals_schema();
    let args = json!({
        "category": 7,
        "availability": "tomorrow",
        "max_results": 0
    });
    let err = validate_arguments("search_professionals", &schema, &args).unwrap_err();
    match err {
        ValidationError::Invalid { tool, violations } => {
            assert_eq!(tool, "search_professionals");
            assert!(violations.iter().any(|v| v.contains("/category")));
            assert!(violations.iter().any(|v| v.contains("/availability")));
            assert!(violations.iter().any(|v| v.contains("/max_results")));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn advice_schema_requires_question() {
    let schema = home_advice_schema();
    assert!(validate_arguments("get_home_advice", &schema, &json!({})).is_err());
    assert!(validate_arguments("get_home_advice", &schema, &json!({ "question": "" })).is_err());
    validate_arguments(
        "get_home_advice",
        &schema,
        &json!({ "question": "how do I fix a leaky faucet" }),
    )
    .expect("non-empty question must validate");
}

#[test]
fn quote_schema_requires_all_fields_and_timing_enum() {
    let schema = request_quote_schema();

    let valid = json!({
        "professional_id": "pro-001",
        "service_needed": "Fix sink",
        "homeowner_name": "Jane Doe",
        "homeowner_zip": "90210",
        "preferred_timing": "within_a_month",
        "notes": "optional"
    });
    validate_arguments("request_quote", &schema, &valid).expect("valid quote must validate");

    let bad_timing = json!({
        "professional_id": "pro-001",
        "service_needed": "Fix sink",
        "homeowner_name": "Jane Doe",
        "homeowner_zip": "90210",
        "preferred_timing": "whenever"
    });
    assert!(validate_arguments("request_quote", &schema, &bad_timing).is_err());

    let missing_name = json!({
        "professional_id": "pro-001",
        "service_needed": "Fix sink",
        "homeowner_zip": "90210",
        "preferred_timing": "within_a_month"
    });
    assert!(validate_arguments("request_quote", &schema, &missing_name).is_err());
}

#[test]
fn defaults_apply_after_schema_acceptance() {
    // The schema accepts the minimal object; typed deserialization then
    // fills availability=any and max_results=3.
    let params: SearchProfessionalsParams =
        serde_json::from_value(json!({ "category": "plumbing" })).unwrap();
    assert_eq!(params.max_results, 3);
    assert!(params.zip_code.is_none());
    assert!(matches!(
        params.availability,
        angi_mcp_server::dataset::AvailabilityFilter::Any
    ));
}

#[test]
fn every_advertised_tool_has_a_schema() {
    for name in ["search_professionals", "get_home_advice", "request_quote", "health"] {
        assert!(schema_for_tool(name).is_some(), "missing schema for {name}");
    }
    assert!(schema_for_tool("book_a_flight").is_none());
}
