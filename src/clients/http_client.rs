//! Blocking HTTP client for GitLab API communication.
//!
//! This module provides the [`Transport`] seam used by the GraphQL and REST
//! clients, and [`HttpClient`], its production implementation.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{EndpointUrl, GitlabConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends a request and returns the raw response body.
///
/// Implementations block the calling thread until the response has been read
/// or the request has failed. They never retry.
pub trait Transport {
    /// Sends `request` and returns the response body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid, the connection fails,
    /// or the server answers with a non-2xx status.
    fn send(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError> {
        (**self).send(request)
    }
}

/// Blocking HTTP client bound to one base URL and one session.
///
/// The client handles:
/// - URL construction from the base URL and the request path
/// - Default headers: `User-Agent`, `Accept`, and `Authorization`
/// - Status checking, with the `X-Request-Id` header kept for error reports
///
/// # Example
///
/// ```rust,no_run
/// use gitlab_graphql::clients::{HttpClient, HttpMethod, HttpRequest};
/// use gitlab_graphql::{AccessToken, GitlabConfig, Session};
///
/// let config = GitlabConfig::default();
/// let session = Session::bearer(AccessToken::new("token").unwrap());
/// let client = HttpClient::new(config.rest_url(), &session, Some(&config));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "user").build().unwrap();
/// let body = client.request(request).unwrap();
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given base URL and session.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The endpoint every request path is resolved against
    /// * `session` - The session providing the `Authorization` header
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_url: &EndpointUrl, session: &Session, config: Option<&GitlabConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(GitlabConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}GitLab GraphQL Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), session.authorization());

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves `path` against the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Sends an HTTP request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub fn request(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send()?;

        let status = res.status();
        let request_id = res
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = res.bytes()?.to_vec();

        if status.is_success() {
            return Ok(body);
        }

        let message = String::from_utf8_lossy(&body).into_owned();
        tracing::warn!(
            "Request to {} failed with status {}: {}",
            url,
            status.as_u16(),
            message
        );

        Err(HttpError::Response(HttpResponseError {
            code: status.as_u16(),
            message,
            error_reference: request_id,
        }))
    }
}

impl Transport for HttpClient {
    fn send(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError> {
        self.request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_session() -> Session {
        Session::new(AccessToken::new("test-access-token").unwrap(), "Bearer")
    }

    fn create_test_client(config: Option<&GitlabConfig>) -> HttpClient {
        let base = EndpointUrl::new("https://gitlab.example.com/api/v4").unwrap();
        HttpClient::new(&base, &create_test_session(), config)
    }

    #[test]
    fn test_client_construction_with_session() {
        let client = create_test_client(None);
        assert_eq!(client.base_url(), "https://gitlab.example.com/api/v4");
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = create_test_client(None);
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client(None);
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client(None);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("GitLab GraphQL Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GitlabConfig::builder()
            .user_agent_prefix("gitlabcli/0.1.1")
            .build()
            .unwrap();
        let client = create_test_client(Some(&config));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("gitlabcli/0.1.1 | "));
    }

    #[test]
    fn test_url_for_joins_paths() {
        let client = create_test_client(None);
        assert_eq!(client.url_for(""), "https://gitlab.example.com/api/v4");
        assert_eq!(
            client.url_for("/projects/1/users"),
            "https://gitlab.example.com/api/v4/projects/1/users"
        );
        assert_eq!(client.url_for("user"), "https://gitlab.example.com/api/v4/user");
    }

    #[test]
    fn test_invalid_request_fails_before_sending() {
        let client = create_test_client(None);
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: String::new(),
            body: None,
            body_type: None,
        };

        assert!(matches!(
            client.request(request),
            Err(HttpError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
