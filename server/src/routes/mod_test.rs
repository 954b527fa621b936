use super::*;
use crate::state::test_helpers::{MockLeadStore, test_app_state};

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (state, _store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, None).unwrap()).await;

    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn post_leads_round_trips_through_router() {
    let (state, store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, None).unwrap()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads"))
        .json(&serde_json::json!({ "email": "ceo@acme.io", "website": "acme.io" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(store.inserted().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_validation_error() {
    let (state, store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, None).unwrap()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads"))
        .header("content-type", "application/json")
        .body("{\"email\":")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "validation");
    assert!(store.inserted().is_empty());
}

#[tokio::test]
async fn missing_field_is_validation_error() {
    let (state, store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, None).unwrap()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads"))
        .json(&serde_json::json!({ "email": "ceo@acme.io" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    assert!(store.inserted().is_empty());
}

#[tokio::test]
async fn get_on_leads_is_not_allowed() {
    let (state, _store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, None).unwrap()).await;

    let response = reqwest::get(format!("{base}/api/leads")).await.unwrap();
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn configured_origin_is_echoed_on_preflight() {
    let (state, _store) = test_app_state(MockLeadStore::accepting());
    let base = serve(api_routes(state, Some("https://apoloordonez.com")).unwrap()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/leads"))
        .header("origin", "https://apoloordonez.com")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "https://apoloordonez.com"
    );
}

#[test]
fn invalid_origin_is_rejected() {
    let (state, _store) = test_app_state(MockLeadStore::accepting());
    assert!(api_routes(state, Some("https://bad\norigin")).is_err());
}
