//! Document API endpoints.
//!
//! Return the raw markdown or rendered HTML of one document. Missing
//! documents yield an empty string, not an error.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::handlers::{Envelope, PathQuery};
use crate::state::AppState;

/// Handle GET /api/document.
pub(crate) async fn get_document(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Json<Envelope<String>> {
    let markdown = state.library.get_markdown(query.document_path());
    Json(Envelope::ok(markdown.to_string()))
}

/// Handle GET /api/document/html.
pub(crate) async fn get_document_html(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Json<Envelope<String>> {
    Json(Envelope::ok(state.library.get_parsed(query.document_path())))
}
