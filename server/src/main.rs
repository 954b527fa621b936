//! Landing-site server: Leptos SSR pages plus the lead capture API.
#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::leads::SupabaseLeadStore;

#[tokio::main]
async fn main() {
    // Missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Fail closed: without backend credentials the form has nowhere to write.
    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "server configuration invalid");
            std::process::exit(1);
        }
    };
    tracing::info!(backend = ?config.backend, "lead backend configured");

    let store = SupabaseLeadStore::new(&config.backend).expect("lead store init failed");
    let state = state::AppState::new(Arc::new(store));

    let app = routes::leptos_app(state, config.cors_origin.as_deref()).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "landing site listening");
    axum::serve(listener, app).await.expect("server failed");
}
