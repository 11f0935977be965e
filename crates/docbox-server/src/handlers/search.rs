//! Search API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::Envelope;
use crate::state::AppState;

/// Query for GET /api/search.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    key: String,
}

/// Handle GET /api/search.
///
/// An uncached keyword reads every document, so the search runs on the
/// blocking thread pool.
pub(crate) async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Envelope<Vec<String>>>, ServerError> {
    let library = Arc::clone(&state.library);
    let results = tokio::task::spawn_blocking(move || library.search(&query.key)).await?;
    Ok(Json(Envelope::ok(results.to_vec())))
}
