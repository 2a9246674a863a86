// In crates/web-server/src/lib.rs

use app_config::ServerSettings;
use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::get,
};
use engine::SignalService;
use std::sync::Arc;
use tokio::net::TcpListener;
use types::PredictResponse;

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// The shared application state that is available to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SignalService>,
}

/// Creates the main application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router {
    // The page and the API are served from the same origin; CORS stays open
    // so the endpoint can also be polled from other dashboards.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/predict", get(predict_handler))
        .route("/health", get(health_check_handler))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// The handler for `GET /`.
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The handler for `GET /predict`.
/// Fetches a fresh price, records it and returns the resulting signal.
async fn predict_handler(State(state): State<AppState>) -> Json<PredictResponse> {
    let result = state.service.handle_signal_request().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Predict request failed.");
    }
    Json(PredictResponse::from(result))
}

/// The main entry point for running the web server.
///
/// This function sets up the TCP listener and serves the application router.
/// It will run forever until the process is terminated.
pub async fn run(settings: ServerSettings, service: Arc<SignalService>) -> Result<()> {
    let app = create_router(AppState { service });

    let address = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&address).await.map_err(Error::ServerBindError)?;
    tracing::info!("Web server listening on {}", address);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::Serve)?;

    Ok(())
}
