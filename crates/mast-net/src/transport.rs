//! Transport abstraction for HTTP requests.
//!
//! Every client in this crate talks through the [`Transport`] trait, so
//! protocol logic can be exercised against scripted responses without a
//! network. The production implementation wraps [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// HTTP method. Only the verbs the protocol uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request to be executed by a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST request for the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A response as seen by the protocol clients: status plus raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as (lossy) text, for error reporting.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport trait for executing HTTP requests.
///
/// Implementations must be thread-safe (Send + Sync). A transport performs
/// exactly one attempt per call; callers decide what a failure means.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request, returning the response whatever its status.
    ///
    /// Errors only when no HTTP response was obtained at all.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request).await
    }
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// A scripted transport for testing.
///
/// Hands out queued responses in order and records every request it saw.
pub mod scripted {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Transport that replays a fixed script of responses.
    #[derive(Default)]
    pub struct ScriptedTransport {
        script: Mutex<VecDeque<Result<HttpResponse>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        /// Create an empty scripted transport.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and body.
        pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
            self.script.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                body: body.into(),
            }));
        }

        /// Queue the same response `count` times.
        pub fn push_repeated(&self, status: u16, body: &[u8], count: usize) {
            for _ in 0..count {
                self.push_response(status, body.to_vec());
            }
        }

        /// Queue a transport failure.
        pub fn push_error(&self, message: impl Into<String>) {
            self.script
                .lock()
                .unwrap()
                .push_back(Err(TransportError::Network(message.into())));
        }

        /// All requests executed so far, in order.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Number of responses still queued.
        pub fn remaining(&self) -> usize {
            self.script.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("script exhausted".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedTransport;
    use super::*;

    #[tokio::test]
    async fn test_scripted_transport_replays_in_order() {
        let transport = ScriptedTransport::new();
        transport.push_response(200, b"first".to_vec());
        transport.push_response(404, b"second".to_vec());

        let first = transport
            .execute(HttpRequest::get("https://example/one"))
            .await
            .unwrap();
        assert_eq!(first.status, 200);
        assert_eq!(first.text(), "first");

        let second = transport
            .execute(HttpRequest::get("https://example/two"))
            .await
            .unwrap();
        assert_eq!(second.status, 404);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://example/one");
        assert_eq!(requests[1].method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_scripted_transport_exhausted_script_errors() {
        let transport = ScriptedTransport::new();
        let result = transport.execute(HttpRequest::get("https://example")).await;
        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::post("https://hub.example/v1/submitMessage")
            .header("Content-Type", "application/octet-stream")
            .header("x-api-key", "secret")
            .body(vec![0x01, 0x02]);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.body.as_deref(), Some(&[0x01, 0x02][..]));
    }
}
