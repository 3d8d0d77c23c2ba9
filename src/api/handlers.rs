//! HTTP handlers for the fruit routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::metrics;
use crate::store::{Fruit, FruitForm, FruitStore};

use super::routes::FRUITS_PATH;
use super::views::{EditView, IndexView, NewView, RenderHtml, ShowView};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fruit records.
    pub store: FruitStore,
    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around a store, without metrics.
    pub fn new(store: FruitStore) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FruitStore::seeded())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Number of fruits currently stored.
    pub fruits: usize,
}

/// `GET /` sends visitors to the list.
pub async fn root() -> Redirect {
    Redirect::to(FRUITS_PATH)
}

/// `GET /fruits` lists every fruit.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let _timer = metrics::timer_http("index");
    let fruits = state.store.list().await;
    IndexView { fruits }.render_html()
}

/// `GET /fruits/new` renders the creation form.
pub async fn new_form() -> Result<Html<String>> {
    let _timer = metrics::timer_http("new");
    NewView.render_html()
}

/// `POST /fruits` appends the submitted fruit.
///
/// The body is read as a form regardless of `Content-Type`; anything missing
/// or malformed falls back to defaults instead of rejecting the request.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Redirect {
    let _timer = metrics::timer_http("create");
    let fruit = Fruit::from(FruitForm::from_urlencoded(&body));
    let name = fruit.name.clone();
    let id = state.store.append(fruit).await;

    metrics::inc_fruits_created();
    info!(id, name = %name, "Created fruit");

    Redirect::to(FRUITS_PATH)
}

/// `GET /fruits/:id` shows one fruit.
pub async fn show(Path(id): Path<usize>, State(state): State<AppState>) -> Result<Html<String>> {
    let _timer = metrics::timer_http("show");
    let fruit = state.store.get(id).await.ok_or(AppError::NotFound { id })?;
    ShowView { fruit, id }.render_html()
}

/// `GET /fruits/:id/edit` renders the pre-filled edit form.
pub async fn edit(Path(id): Path<usize>, State(state): State<AppState>) -> Result<Html<String>> {
    let _timer = metrics::timer_http("edit");
    let fruit = state.store.get(id).await.ok_or(AppError::NotFound { id })?;
    EditView { fruit, id }.render_html()
}

/// `PUT /fruits/:id` replaces the fruit at `id`.
pub async fn update(
    Path(id): Path<usize>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Redirect> {
    let _timer = metrics::timer_http("update");
    let fruit = Fruit::from(FruitForm::from_urlencoded(&body));
    state.store.replace(id, fruit).await?;

    metrics::inc_fruits_updated();
    info!(id, "Updated fruit");

    Ok(Redirect::to(FRUITS_PATH))
}

/// `DELETE /fruits/:id` removes the fruit at `id`.
pub async fn destroy(Path(id): Path<usize>, State(state): State<AppState>) -> Result<Redirect> {
    let _timer = metrics::timer_http("destroy");
    let removed = state.store.remove_at(id).await?;

    metrics::inc_fruits_destroyed();
    info!(id, name = %removed.name, "Destroyed fruit");

    Ok(Redirect::to(FRUITS_PATH))
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        fruits: state.store.len().await,
    })
}

/// Prometheus exposition, or 404 when metrics are disabled.
pub async fn metrics_page(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => {
            debug!("Metrics requested but disabled");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
