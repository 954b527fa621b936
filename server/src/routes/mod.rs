//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole site: the JSON API under `/api`, a
//! health probe, the Leptos SSR pages (`/`, `/simulator`, `/legal`), and the
//! compiled WASM/CSS bundle under `/pkg`.

pub mod leads;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API and health probe.
///
/// The API is same-origin unless `cors_origin` names a single allowed origin.
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn api_routes(state: AppState, cors_origin: Option<&str>) -> Result<Router, String> {
    let router = Router::new()
        .route("/api/leads", post(leads::submit_lead))
        .route("/healthz", get(healthz))
        .with_state(state);

    let Some(origin) = cors_origin else {
        return Ok(router);
    };
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| format!("invalid CORS_ALLOW_ORIGIN {origin:?}: {e}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    Ok(router.layer(cors))
}

/// Full site: API routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the CORS origin is
/// invalid.
pub fn leptos_app(state: AppState, cors_origin: Option<&str>) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, cors_origin)?
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
