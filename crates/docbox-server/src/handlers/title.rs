//! Title API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::handlers::{Envelope, PathQuery};
use crate::state::AppState;

/// Handle GET /api/title.
///
/// Returns the breadcrumb title from the table of contents, or an empty
/// string if the document is not listed.
pub(crate) async fn get_title(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Json<Envelope<String>> {
    Json(Envelope::ok(
        state.library.resolve_title(query.document_path()),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::handlers::test_support::{router, send};

    #[tokio::test]
    async fn test_get_title_nested() {
        let (_, body) = send(router(), "GET", "/api/title?path=guide/intro").await;

        assert_eq!(body["data"], "Intro - Guide");
    }

    #[tokio::test]
    async fn test_get_title_default_path() {
        let (_, body) = send(router(), "GET", "/api/title").await;

        assert_eq!(body["data"], "Home");
    }

    #[tokio::test]
    async fn test_get_title_unlisted() {
        let (_, body) = send(router(), "GET", "/api/title?path=nowhere").await;

        assert_eq!(body["code"], 1);
        assert_eq!(body["data"], "");
    }
}
