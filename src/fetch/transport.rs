//! Transport seam - the HTTP client collaborator.
//!
//! The adapter depends on one capability only: perform an HTTP request and
//! hand back the status code and raw body, or a [`TransportError`]. The
//! [`Transport`] trait is that capability; [`HttpTransport`] implements it
//! with a pooled [`reqwest`] client. Connection pooling, TLS and timeouts
//! belong to the client; the trait carries none of them.
//!
//! Status interpretation is deliberately not the transport's concern: a 404
//! is a delivered response, and whether it means "absent" or "error" is
//! decided by the adapter operation that asked for it.

use std::future::Future;
use std::time::Duration;

use super::error::TransportError;

/// The HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// An idempotent read.
    Get,
    /// A creation request carrying a body.
    Post,
}

/// One HTTP request to an external resource.
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::{Method, Request};
///
/// let request = Request::get("http://localhost:8000/items/42");
/// assert_eq!(request.method, Method::Get);
/// assert!(request.body.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL of the resource.
    pub url: String,
    /// Header name/value pairs sent with the request.
    pub headers: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Creates a POST request for the given URL with a JSON body.
    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        }
    }
}

/// One delivered HTTP response: status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns `true` if the status code is in the 2xx range.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The HTTP client collaborator.
///
/// Implementations perform exactly one round trip per call, share no mutable
/// state between calls, and never retry. Dropping the returned future
/// abandons the in-flight request, so cancellation propagates instead of
/// degrading into an empty result.
pub trait Transport {
    /// Performs the request, returning the delivered response or the
    /// transport failure that prevented delivery.
    fn request(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

/// A [`Transport`] backed by a pooled [`reqwest::Client`].
///
/// Resource paths handed to the adapter are joined onto a base URL fixed at
/// construction, so call sites work with paths like `/items/42`. The request
/// timeout is configurable and defaults to the client's (none); this crate
/// never hard-codes one.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use optfetch::fetch::HttpTransport;
///
/// let transport = HttpTransport::new("http://localhost:8000")?;
/// let with_timeout =
///     HttpTransport::with_timeout("http://localhost:8000", Duration::from_secs(5))?;
/// # Ok::<(), optfetch::fetch::TransportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given base URL with the client's default
    /// timeout behavior.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::build(base_url.into(), None)
    }

    /// Creates a transport for the given base URL with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Self::build(base_url.into(), Some(timeout))
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| TransportError::new(&base_url, error.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins a resource path onto the configured base URL.
    ///
    /// Absolute URLs pass through untouched.
    #[must_use]
    pub fn resolve(&self, resource: &str) -> String {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            resource.to_string()
        } else if resource.starts_with('/') {
            format!("{}{resource}", self.base_url)
        } else {
            format!("{}/{resource}", self.base_url)
        }
    }
}

impl Transport for HttpTransport {
    async fn request(&self, request: Request) -> Result<Response, TransportError> {
        let url = self.resolve(&request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
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
            .map_err(|error| TransportError::new(&url, error.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::new(&url, error.to_string()))?;

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_paths() {
        let transport = HttpTransport::new("http://localhost:8000/").unwrap();
        assert_eq!(
            transport.resolve("/items/42"),
            "http://localhost:8000/items/42"
        );
        assert_eq!(transport.resolve("items/"), "http://localhost:8000/items/");
        assert_eq!(
            transport.resolve("https://other/items/"),
            "https://other/items/"
        );
    }

    #[test]
    fn test_success_status_range() {
        let ok = Response {
            status: 204,
            body: Vec::new(),
        };
        let missing = Response {
            status: 404,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
