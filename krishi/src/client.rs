//! Chat-completion service client.
//!
//! [`CompletionClient`] holds the HTTP client and the endpoint
//! configuration (completions URL, customer id, authorization value) as an
//! explicit, injected value. Nothing here is process-wide global state, so
//! tests can point a client at a local endpoint without touching the
//! environment. The actual `complete` operation lives in
//! [`completion`](crate::completion).

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::Arc;

/// Default completions endpoint of the advisory service.
pub const DEFAULT_COMPLETIONS_URL: &str = "https://oi-server.onrender.com/chat/completions";

/// Default customer identifier sent in the `customerId` header.
pub const DEFAULT_CUSTOMER_ID: &str = "navg803@gmail.com";

/// Default `Authorization` header value.
///
/// The service does not issue per-caller credentials; this is a fixed
/// placeholder, not a secret with a lifecycle.
pub const DEFAULT_AUTHORIZATION: &str = "Bearer xxx";

/// Client for the remote chat-completion service.
///
/// Holds no mutable state: cloning is cheap and concurrent calls from
/// multiple tasks need no synchronization.
///
/// # Example
///
/// ```rust,ignore
/// use krishi::CompletionClient;
///
/// // Default service endpoint
/// let client = CompletionClient::new();
///
/// // Local endpoint for testing
/// let client = CompletionClient::builder()
///     .completions_url("http://127.0.0.1:8080/chat/completions")
///     .timeout_secs(10)
///     .build();
/// ```
#[derive(Clone)]
pub struct CompletionClient {
    http_client: reqwest::Client,
    completions_url: Arc<str>,
    customer_id: Arc<str>,
    authorization: Arc<str>,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("completions_url", &self.completions_url)
            .field("customer_id", &self.customer_id)
            .field("authorization", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Default for CompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionClient {
    /// Create a client with the default service configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> CompletionClientBuilder {
        CompletionClientBuilder::default()
    }

    /// The completions endpoint this client posts to.
    #[must_use]
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    /// The static headers sent with every request.
    #[must_use]
    pub fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(3);

        if let Ok(value) = HeaderValue::from_str(&self.customer_id) {
            headers.insert("customerId", value);
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Ok(value) = HeaderValue::from_str(&self.authorization) {
            headers.insert(AUTHORIZATION, value);
        }

        headers
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

/// Builder for [`CompletionClient`].
#[derive(Debug, Default)]
pub struct CompletionClientBuilder {
    completions_url: Option<String>,
    customer_id: Option<String>,
    authorization: Option<String>,
    timeout_secs: Option<u64>,
}

impl CompletionClientBuilder {
    /// Set the completions endpoint URL.
    #[must_use]
    pub fn completions_url(mut self, url: impl Into<String>) -> Self {
        self.completions_url = Some(url.into());
        self
    }

    /// Set the customer identifier sent in the `customerId` header.
    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Set the full `Authorization` header value (including the scheme).
    #[must_use]
    pub fn authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Set the transport timeout in seconds.
    ///
    /// Default is no timeout, matching the reference service behavior.
    #[must_use]
    pub const fn timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn build(self) -> CompletionClient {
        let completions_url = self
            .completions_url
            .unwrap_or_else(|| DEFAULT_COMPLETIONS_URL.to_string());
        let customer_id = self
            .customer_id
            .unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string());
        let authorization = self
            .authorization
            .unwrap_or_else(|| DEFAULT_AUTHORIZATION.to_string());
        let http_client = Self::build_http_client(self.timeout_secs);

        CompletionClient {
            http_client,
            completions_url: completions_url.into(),
            customer_id: customer_id.into(),
            authorization: authorization.into(),
        }
    }

    /// Build the HTTP client with configured settings.
    fn build_http_client(timeout_secs: Option<u64>) -> reqwest::Client {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }

        builder.build().expect("Failed to build HTTP client")
    }
}
