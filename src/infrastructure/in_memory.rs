use crate::domain::ports::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A scripted, in-memory transport.
///
/// Responses are registered per method and URL; every request received is
/// recorded, so callers can check what was sent (or that nothing was). Clones
/// share the same script and log, which lets a test keep a handle while the
/// client owns a boxed clone. Unscripted requests get a 404.
#[derive(Default, Clone)]
pub struct StubTransport {
    responses: Arc<RwLock<HashMap<(Method, String), HttpResponse>>>,
    requests: Arc<RwLock<Vec<HttpRequest>>>,
}

impl StubTransport {
    /// Creates a transport with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method url` with `response` from now on, replacing any previous script.
    pub async fn stub(&self, method: Method, url: impl Into<String>, response: HttpResponse) {
        let mut responses = self.responses.write().await;
        responses.insert((method, url.into()), response);
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.requests.read().await.last().cloned()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let key = (request.method, request.url.clone());
        self.requests.write().await.push(request);

        let responses = self.responses.read().await;
        Ok(responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "Not Found")))
    }
}
