//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use docbox_site::Library;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router serving `library`.
pub fn create_router(library: Arc<Library>) -> Router {
    let state = Arc::new(AppState { library });

    let api_routes = Router::new()
        .route("/api/document", get(handlers::document::get_document))
        .route(
            "/api/document/html",
            get(handlers::document::get_document_html),
        )
        .route("/api/title", get(handlers::title::get_title))
        .route("/api/search", get(handlers::search::search))
        .route("/api/hooks/sync", post(handlers::hooks::sync));

    let [csp, nosniff, frame_options] = security::header_layers();
    Router::new()
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(csp)
                .layer(nosniff)
                .layer(frame_options),
        )
        .with_state(state)
}
