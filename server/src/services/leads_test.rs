use super::*;
use crate::config::RequestTimeouts;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use std::sync::{Arc, Mutex};

fn backend(url: &str) -> BackendConfig {
    BackendConfig {
        url: url.to_owned(),
        anon_key: "anon-key".into(),
        table: "leads".into(),
        timeouts: RequestTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn lead() -> NewLead {
    NewLead { email: "ceo@acme.io".into(), website: "acme.io".into(), created_at: "2026-10-18T12:00:00Z".into() }
}

// =============================================================================
// Fake REST endpoint
// =============================================================================

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(HeaderMap, serde_json::Value)>>>,
}

/// Serve `/rest/v1/leads` on an ephemeral port, replying with `status` and `body`.
async fn spawn_rest(status: StatusCode, body: &'static str) -> (String, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/rest/v1/leads",
            post(move |State(captured): State<Captured>, headers: HeaderMap, Json(payload): Json<serde_json::Value>| async move {
                captured.requests.lock().unwrap().push((headers, payload));
                (status, body)
            }),
        )
        .with_state(captured.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), captured)
}

// =============================================================================
// table_endpoint
// =============================================================================

#[test]
fn table_endpoint_joins_rest_path() {
    assert_eq!(table_endpoint(&backend("https://p.supabase.co")), "https://p.supabase.co/rest/v1/leads");
}

#[test]
fn table_endpoint_tolerates_trailing_slash() {
    assert_eq!(table_endpoint(&backend("https://p.supabase.co/")), "https://p.supabase.co/rest/v1/leads");
}

#[test]
fn store_uses_configured_table() {
    let mut cfg = backend("https://p.supabase.co");
    cfg.table = "leads_staging".into();
    let store = SupabaseLeadStore::new(&cfg).unwrap();
    assert_eq!(store.endpoint(), "https://p.supabase.co/rest/v1/leads_staging");
}

// =============================================================================
// parse_error_body
// =============================================================================

#[test]
fn parse_error_body_keeps_code_and_message() {
    let err = parse_error_body(
        404,
        r#"{"code":"42P01","message":"relation \"public.leads\" does not exist","details":null,"hint":null}"#,
    );
    match err {
        LeadStoreError::Backend { status, code, message } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("42P01"));
            assert!(message.contains("does not exist"));
        }
        other => panic!("expected Backend, got {other:?}"),
    }
}

#[test]
fn parse_error_body_handles_plain_text() {
    let err = parse_error_body(503, "upstream unavailable\n");
    match err {
        LeadStoreError::Backend { code, message, .. } => {
            assert_eq!(code, None);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected Backend, got {other:?}"),
    }
}

#[test]
fn parse_error_body_empty_uses_status() {
    let err = parse_error_body(500, "");
    match err {
        LeadStoreError::Backend { code, message, .. } => {
            assert_eq!(code, None);
            assert_eq!(message, "HTTP 500");
        }
        other => panic!("expected Backend, got {other:?}"),
    }
}

#[test]
fn parse_error_body_blank_code_is_none() {
    let err = parse_error_body(400, r#"{"code":"","message":"bad"}"#);
    assert!(matches!(err, LeadStoreError::Backend { code: None, .. }));
}

// =============================================================================
// to_failure
// =============================================================================

#[test]
fn backend_error_maps_to_failure_with_code() {
    let err = LeadStoreError::Backend { status: 401, code: Some("42501".into()), message: "denied".into() };
    let failure = err.to_failure();
    assert_eq!(failure.code.as_deref(), Some("42501"));
    assert_eq!(failure.user_message(), leads::PERMISSION_DENIED_MESSAGE);
}

#[test]
fn request_error_maps_to_generic_failure() {
    let failure = LeadStoreError::Request("connection refused".into()).to_failure();
    assert_eq!(failure.code, None);
    assert_eq!(failure.message, "connection refused");
    assert_eq!(failure.user_message(), leads::GENERIC_FAILURE_MESSAGE);
}

// =============================================================================
// created_at_now
// =============================================================================

#[test]
fn created_at_now_is_rfc3339_utc() {
    let stamp = created_at_now().unwrap();
    let parsed = OffsetDateTime::parse(&stamp, &Rfc3339).unwrap();
    assert_eq!(parsed.offset(), time::UtcOffset::UTC);
}

// =============================================================================
// SupabaseLeadStore::insert
// =============================================================================

#[tokio::test]
async fn insert_posts_single_row_with_auth_headers() {
    let (url, captured) = spawn_rest(StatusCode::CREATED, "").await;
    let store = SupabaseLeadStore::new(&backend(&url)).unwrap();

    store.insert(&lead()).await.unwrap();

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (headers, payload) = &requests[0];
    assert_eq!(headers["apikey"], "anon-key");
    assert_eq!(headers["authorization"], "Bearer anon-key");
    assert_eq!(headers["prefer"], "return=minimal");
    let rows = payload.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "ceo@acme.io");
    assert_eq!(rows[0]["website"], "acme.io");
    assert_eq!(rows[0]["created_at"], "2026-10-18T12:00:00Z");
}

#[tokio::test]
async fn insert_surfaces_rls_rejection() {
    let (url, _captured) = spawn_rest(
        StatusCode::FORBIDDEN,
        r#"{"code":"42501","message":"new row violates row-level security policy for table \"leads\"","details":null,"hint":null}"#,
    )
    .await;
    let store = SupabaseLeadStore::new(&backend(&url)).unwrap();

    let err = store.insert(&lead()).await.unwrap_err();
    match err {
        LeadStoreError::Backend { status, code, .. } => {
            assert_eq!(status, 403);
            assert_eq!(code.as_deref(), Some("42501"));
        }
        other => panic!("expected Backend, got {other:?}"),
    }
}

#[tokio::test]
async fn insert_reports_unreachable_backend_as_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = SupabaseLeadStore::new(&backend(&format!("http://{addr}"))).unwrap();
    let err = store.insert(&lead()).await.unwrap_err();
    assert!(matches!(err, LeadStoreError::Request(_)));
}
