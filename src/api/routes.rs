//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower::Layer;
use tower::util::MapRequest;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create, destroy, edit, health, index, metrics_page, new_form, root, show, update, AppState,
};
use super::method_override::method_override_layer;

/// Path of the fruit list; every mutation redirects here.
pub const FRUITS_PATH: &str = "/fruits";

/// Router with method override applied ahead of routing.
pub type App = MapRequest<Router, fn(axum::extract::Request) -> axum::extract::Request>;

/// Create the fruit router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Fruit resource
        .route("/fruits", get(index).post(create))
        .route("/fruits/new", get(new_form))
        .route("/fruits/:id", get(show).put(update).delete(destroy))
        .route("/fruits/:id/edit", get(edit))
        // Operations
        .route("/health", get(health))
        .route("/metrics", get(metrics_page))
        .with_state(state)
}

/// Create the full application: routes, static files, request logging and
/// form method override.
pub fn create_app(state: AppState, static_dir: &str) -> App {
    let router = create_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http());

    method_override_layer().layer(router)
}
