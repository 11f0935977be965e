//! Repository webhook endpoint.
//!
//! A push to the documentation repository calls `POST /api/hooks/sync`,
//! which pulls the working copy and drops every cache.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::Envelope;
use crate::state::AppState;

/// Payload of POST /api/hooks/sync.
#[derive(Debug, Serialize)]
pub(crate) struct SyncResponse {
    /// Whether the pull succeeded and caches were invalidated.
    updated: bool,
}

/// Handle POST /api/hooks/sync.
pub(crate) async fn sync(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<SyncResponse>>, ServerError> {
    let library = Arc::clone(&state.library);
    let updated = tokio::task::spawn_blocking(move || library.sync()).await?;
    Ok(Json(Envelope::ok(SyncResponse { updated })))
}
