use super::*;
use crate::state::test_helpers::{MockLeadStore, test_app_state};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn submission(email: &str, website: &str) -> Result<Json<LeadSubmission>, JsonRejection> {
    Ok(Json(LeadSubmission { email: email.into(), website: website.into() }))
}

// =============================================================================
// submit_lead
// =============================================================================

#[tokio::test]
async fn accepted_lead_is_inserted_once() {
    let (state, store) = test_app_state(MockLeadStore::accepting());

    let response = submit_lead(State(state), submission(" ceo@acme.io ", "acme.io ")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
    let inserted = store.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].email, "ceo@acme.io");
    assert_eq!(inserted[0].website, "acme.io");
}

#[tokio::test]
async fn accepted_lead_gets_rfc3339_timestamp() {
    let (state, store) = test_app_state(MockLeadStore::accepting());
    let before = OffsetDateTime::now_utc() - time::Duration::seconds(1);

    let _ = submit_lead(State(state), submission("ceo@acme.io", "acme.io")).await;

    let stamp = OffsetDateTime::parse(&store.inserted()[0].created_at, &Rfc3339).unwrap();
    assert!(stamp >= before);
    assert!(stamp <= OffsetDateTime::now_utc() + time::Duration::seconds(1));
}

#[tokio::test]
async fn blank_email_is_rejected_without_insert() {
    let (state, store) = test_app_state(MockLeadStore::accepting());

    let response = submit_lead(State(state), submission("   ", "acme.io")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "validation");
    assert_eq!(body["message"], "email is required");
    assert!(store.inserted().is_empty());
}

#[tokio::test]
async fn blank_website_is_rejected_without_insert() {
    let (state, store) = test_app_state(MockLeadStore::accepting());

    let response = submit_lead(State(state), submission("ceo@acme.io", "")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.inserted().is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected_without_insert() {
    let (state, store) = test_app_state(MockLeadStore::accepting());

    let response = submit_lead(State(state), submission("ceo.acme.io", "acme.io")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.inserted().is_empty());
}

#[tokio::test]
async fn missing_table_surfaces_backend_code() {
    let (state, store) =
        test_app_state(MockLeadStore::rejecting(404, Some("42P01"), "relation \"public.leads\" does not exist"));

    let response = submit_lead(State(state), submission("ceo@acme.io", "acme.io")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "42P01");
    assert_eq!(store.inserted().len(), 1);
}

#[tokio::test]
async fn rls_rejection_surfaces_backend_code() {
    let (state, _store) = test_app_state(MockLeadStore::rejecting(403, Some("42501"), "row-level security"));

    let response = submit_lead(State(state), submission("ceo@acme.io", "acme.io")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let failure: LeadFailure = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(failure.user_message(), leads::PERMISSION_DENIED_MESSAGE);
}

#[tokio::test]
async fn codeless_backend_error_maps_to_generic_message() {
    let (state, _store) = test_app_state(MockLeadStore::rejecting(500, None, "HTTP 500"));

    let response = submit_lead(State(state), submission("ceo@acme.io", "acme.io")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let failure: LeadFailure = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(failure.code, None);
    assert_eq!(failure.user_message(), leads::GENERIC_FAILURE_MESSAGE);
}
