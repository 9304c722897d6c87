use lockstep_rs::{ApiResponse, Error, InvoiceModel, LeadModel, Model};
use miette::Diagnostic;
use reqwest::StatusCode;
use serde_json::{Value, json};

const URL: &str = "https://api.sbx.lockstep.io/api/v1/Leads";

#[test]
fn json_decode_failure_carries_response_context() {
    let response = ApiResponse::new(StatusCode::OK, URL, Some(json!({ "isVoided": 42 })));

    let error = response.json::<InvoiceModel>().unwrap_err();

    assert!(matches!(error, Error::DeserializationError { .. }));
    assert_eq!(error.url(), Some(URL));
    assert_eq!(error.status_code(), Some(StatusCode::OK));
    assert_eq!(error.response_body(), Some(r#"{"isVoided":42}"#));
    let _: &lockstep_rs::SpanTrace = error.span_trace();
    assert!(error.to_string().starts_with("error decoding InvoiceModel response"));
}

#[test]
fn empty_body_reads_as_null() {
    let response = ApiResponse::new(StatusCode::NO_CONTENT, URL, None);

    assert_eq!(response.json::<Option<LeadModel>>().ok(), Some(None));
    assert!(response.json::<Vec<LeadModel>>().is_err());
}

#[test]
fn problem_details_only_for_failures() {
    let problem = json!({
        "title": "One or more validation errors occurred.",
        "status": 400,
        "errors": { "EmailAddress": ["The EmailAddress field is required."] },
    });

    let failed = ApiResponse::new(StatusCode::BAD_REQUEST, URL, Some(problem.clone()));
    let details = failed.error_result().expect("problem details");
    assert_eq!(details.status, Some(400));
    assert_eq!(
        details.errors.unwrap_or_default().get("EmailAddress"),
        Some(&vec!["The EmailAddress field is required.".to_string()])
    );

    let succeeded = ApiResponse::new(StatusCode::OK, URL, Some(problem));
    assert!(succeeded.error_result().is_none());
}

#[test]
fn plain_text_error_bodies_are_kept_as_strings() {
    let response = ApiResponse::new(
        StatusCode::BAD_GATEWAY,
        URL,
        Some(Value::String("<html>Bad Gateway</html>".to_string())),
    );

    assert!(!response.is_success());
    assert!(response.error_result().is_none());
    assert_eq!(
        response.json::<String>().ok().as_deref(),
        Some("<html>Bad Gateway</html>")
    );
}

#[test]
fn errors_are_diagnostics() {
    let error = LeadModel::from_wire(json!({ "name": 7 })).unwrap_err();

    let code = error.code().map(|code| code.to_string());
    assert_eq!(code.as_deref(), Some("lockstep_rs::deserialization_error"));
    assert!(error.help().is_some());

    let report = miette::Report::new(error);
    assert!(format!("{report:?}").contains("LeadModel"));
}
