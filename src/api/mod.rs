//! HTTP API module: fruit routes, HTML views and form method override.

pub mod handlers;
pub mod method_override;
pub mod routes;
pub mod views;

pub use handlers::AppState;
pub use routes::{create_app, create_router, App, FRUITS_PATH};
