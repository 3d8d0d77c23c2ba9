//! In-memory fruit stand.
//!
//! A small server-rendered CRUD app over a list of fruit records. Records live
//! in memory for the lifetime of the process and are addressed by position:
//!
//! ```text
//! GET    /fruits           list
//! GET    /fruits/new       creation form
//! POST   /fruits           create, redirect to /fruits
//! GET    /fruits/:id       show
//! GET    /fruits/:id/edit  edit form
//! PUT    /fruits/:id       replace, redirect to /fruits
//! DELETE /fruits/:id       remove, redirect to /fruits
//! ```
//!
//! HTML forms reach PUT and DELETE by posting with `?_method=PUT` or
//! `?_method=DELETE`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Fruit records and the in-memory store
//! - [`api`]: HTTP routes, views and method override
//! - [`metrics`]: Prometheus counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
