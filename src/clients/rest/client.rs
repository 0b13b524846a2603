//! REST client for the GitLab v4 API.
//!
//! This module provides the [`RestClient`] type for the few operations the
//! GraphQL API does not cover. Responses carry no envelope: the JSON body is
//! bound directly into the caller's value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, Transport};
use crate::config::GitlabConfig;

/// REST API client for GitLab.
///
/// # Example
///
/// ```rust,no_run
/// use gitlab_graphql::clients::RestClient;
/// use gitlab_graphql::{AccessToken, Session};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct User {
///     username: String,
/// }
///
/// let session = Session::bearer(AccessToken::new("glpat-token").unwrap());
/// let client = RestClient::new(&session, None);
///
/// let mut members: Vec<User> = Vec::new();
/// client.get("projects/group%2Fproject/users", &mut members).unwrap();
/// ```
#[derive(Debug)]
pub struct RestClient<T = HttpClient> {
    transport: T,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client for the configured REST endpoint.
    ///
    /// Without a configuration the public `gitlab.com` endpoint is used.
    #[must_use]
    pub fn new(session: &Session, config: Option<&GitlabConfig>) -> Self {
        let endpoint = config.map_or_else(
            || GitlabConfig::default().rest_url().clone(),
            |config| config.rest_url().clone(),
        );
        tracing::debug!("Creating REST client for {}", endpoint);

        Self::with_transport(HttpClient::new(&endpoint, session, config))
    }
}

impl<T> RestClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> RestClient<T> {
    /// Sends a GET request and binds the JSON body into `shape`.
    ///
    /// # Errors
    ///
    /// - [`RestError::InvalidPath`] if the path is empty
    /// - [`RestError::Http`] if the request fails or returns non-2xx
    /// - [`RestError::Decode`] if the body does not fit `D`
    pub fn get<D: DeserializeOwned>(&self, path: &str, shape: &mut D) -> Result<(), RestError> {
        let request = HttpRequest::builder(HttpMethod::Get, normalize_path(path)?)
            .build()
            .map_err(HttpError::from)?;
        self.send(request, shape)
    }

    /// Sends a POST request with a JSON body and binds the response into `shape`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`RestError::Decode`] if `body`
    /// cannot be serialized.
    pub fn post<B, D>(&self, path: &str, body: &B, shape: &mut D) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path)?)
            .body(serde_json::to_string(body)?)
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;
        self.send(request, shape)
    }

    fn send<D: DeserializeOwned>(&self, request: HttpRequest, shape: &mut D) -> Result<(), RestError> {
        tracing::debug!("REST {} {}", request.http_method, request.path);

        let body = self.transport.send(request)?;
        *shape = serde_json::from_slice(&body)?;
        Ok(())
    }
}

/// Strips surrounding slashes from a REST path.
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/projects/1/users/")?, "projects/1/users");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim_matches('/');

    if normalized.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(normalized.to_string())
}
