//! Axum HTTP API server.
//!
//! This crate exposes the composition core over HTTP:
//! - `POST /api/compositions` builds a render-ready edit document
//! - `/health`, `/healthz` and `/ready` for probes

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
