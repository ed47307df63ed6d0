pub mod health;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::planning::handlers;
use crate::state::AppState;

/// The single-page hiring plan form.
async fn index_handler() -> Html<&'static str> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(INDEX)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/plans", post(handlers::handle_generate_plan))
        .route(
            "/api/v1/plans/download",
            post(handlers::handle_download_plan),
        )
        .with_state(state)
}
