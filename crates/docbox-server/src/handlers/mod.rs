//! HTTP request handlers.

pub(crate) mod document;
pub(crate) mod hooks;
pub(crate) mod search;
pub(crate) mod title;

use serde::{Deserialize, Serialize};

/// Document path used when a request does not name one.
const DEFAULT_PATH: &str = "index";

/// Envelope `code` for a successful response.
const CODE_OK: u8 = 1;
/// Envelope `code` for a failed response.
const CODE_FAILED: u8 = 0;

/// JSON body shared by every endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<T> {
    /// 1 on success, 0 on failure.
    code: u8,
    /// Failure message, empty on success.
    msg: String,
    /// Endpoint payload (`null` on failure).
    data: T,
}

impl<T: Serialize> Envelope<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            msg: String::new(),
            data,
        }
    }
}

impl Envelope<()> {
    pub(crate) fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_FAILED,
            msg: msg.into(),
            data: (),
        }
    }
}

/// Query for endpoints addressing one document.
#[derive(Debug, Deserialize)]
pub(crate) struct PathQuery {
    path: Option<String>,
}

impl PathQuery {
    /// Requested document path, or `index` when absent or blank.
    pub(crate) fn document_path(&self) -> &str {
        self.path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PATH)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Router fixtures shared by handler tests.

    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use docbox_site::{Library, LibraryConfig};
    use docbox_storage::MockStorage;
    use docbox_vcs::MockPuller;
    use tower::ServiceExt;

    const MENU: &str = "\
* [Home](index.md)
* [Guide](guide.md)
  * [Intro](guide/intro.md)
";

    pub(crate) fn sample_storage() -> Arc<MockStorage> {
        Arc::new(
            MockStorage::new()
                .with_document("menus", MENU)
                .with_document("index", "# Home\n\nStart with the [guide](guide.md).")
                .with_document("guide", "# Guide\n\nInstall docbox.")
                .with_document("guide/intro", "# Intro\n\nInstall and run."),
        )
    }

    pub(crate) fn router_with(storage: Arc<MockStorage>, puller: Arc<MockPuller>) -> Router {
        let library = Arc::new(Library::new(storage, puller, LibraryConfig::default()));
        crate::create_router(library)
    }

    pub(crate) fn router() -> Router {
        router_with(sample_storage(), Arc::new(MockPuller::new()))
    }

    /// Send a request and return the status and parsed JSON body (`null` if empty).
    pub(crate) async fn send(
        router: Router,
        method: &str,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
