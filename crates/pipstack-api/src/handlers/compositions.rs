//! Composition handlers.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use pipstack_edit::create_composition;
use pipstack_models::CompositionRequest;

use crate::error::ApiResult;
use crate::state::AppState;

/// Build a render-ready edit document from a composition request.
///
/// Responds with the populated edit JSON as produced by the core; the body
/// is the exact document a caller would hand to the renderer.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CompositionRequest>,
) -> ApiResult<Response> {
    let document = create_composition(&state.templates, &request).await?;

    info!(
        position = request.position.as_deref().unwrap_or_default(),
        "Built pip composition"
    );

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document,
    )
        .into_response())
}
