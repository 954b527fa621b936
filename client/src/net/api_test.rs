use super::*;

#[test]
fn json_failure_body_keeps_backend_code() {
    let failure = failure_from_response(502, r#"{"code":"42P01","message":"relation does not exist"}"#);
    assert_eq!(failure.code.as_deref(), Some("42P01"));
    assert_eq!(failure.user_message(), leads::MISSING_TABLE_MESSAGE);
}

#[test]
fn null_code_maps_to_generic_message() {
    let failure = failure_from_response(502, r#"{"code":null,"message":"HTTP 500"}"#);
    assert_eq!(failure.code, None);
    assert_eq!(failure.user_message(), leads::GENERIC_FAILURE_MESSAGE);
}

#[test]
fn non_json_body_becomes_transport_failure() {
    let failure = failure_from_response(504, "<html>Gateway Timeout</html>");
    assert_eq!(failure.code, None);
    assert_eq!(failure.message, "lead request failed: 504");
}

#[test]
fn validation_body_maps_to_validation_message() {
    let failure = failure_from_response(422, r#"{"code":"validation","message":"email is required"}"#);
    assert_eq!(failure.user_message(), leads::VALIDATION_MESSAGE);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stub_reports_transport_failure() {
    let submission = LeadSubmission::new("ceo@acme.io", "acme.io").unwrap();
    let result = futures::executor::block_on(submit_lead(&submission));
    assert_eq!(result.unwrap_err().code, None);
}
