//! Configuration types for the GitLab client.
//!
//! This module provides the configuration used to point the clients at a
//! GitLab instance.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GitlabConfig`]: The endpoints and request settings shared by all clients
//! - [`GitlabConfigBuilder`]: A builder for constructing [`GitlabConfig`] instances
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`EndpointUrl`]: A validated endpoint URL
//! - [`ProjectPath`]: A validated `namespace/project` path
//!
//! # Example
//!
//! ```rust
//! use gitlab_graphql::GitlabConfig;
//!
//! // gitlab.com defaults
//! let config = GitlabConfig::default();
//! assert_eq!(config.graphql_url().as_ref(), "https://gitlab.com/api/graphql");
//!
//! // A self-managed instance
//! let config = GitlabConfig::builder()
//!     .graphql_url("https://gitlab.example.com/api/graphql")
//!     .rest_url("https://gitlab.example.com/api/v4")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.rest_url().host_name(), "gitlab.example.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, EndpointUrl, ProjectPath};

use crate::error::ConfigError;

/// Default GraphQL endpoint on gitlab.com.
pub const DEFAULT_GRAPHQL_URL: &str = "https://gitlab.com/api/graphql";

/// Default versioned REST endpoint on gitlab.com.
pub const DEFAULT_REST_URL: &str = "https://gitlab.com/api/v4";

/// Configuration shared by the GraphQL and REST clients.
///
/// Build it once at startup and pass it by reference to every client; it is
/// immutable after construction.
///
/// # Thread Safety
///
/// `GitlabConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitlabConfig {
    graphql_url: EndpointUrl,
    rest_url: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl GitlabConfig {
    /// Creates a new builder for constructing a `GitlabConfig`.
    #[must_use]
    pub fn builder() -> GitlabConfigBuilder {
        GitlabConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn graphql_url(&self) -> &EndpointUrl {
        &self.graphql_url
    }

    /// Returns the REST endpoint.
    #[must_use]
    pub const fn rest_url(&self) -> &EndpointUrl {
        &self.rest_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for GitlabConfig {
    fn default() -> Self {
        Self {
            graphql_url: default_url(DEFAULT_GRAPHQL_URL),
            rest_url: default_url(DEFAULT_REST_URL),
            user_agent_prefix: None,
        }
    }
}

fn default_url(url: &'static str) -> EndpointUrl {
    match EndpointUrl::new(url) {
        Ok(url) => url,
        Err(error) => unreachable!("default endpoint is valid: {error}"),
    }
}

// Verify GitlabConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GitlabConfig>();
};

/// Builder for constructing [`GitlabConfig`] instances.
///
/// # Defaults
///
/// - `graphql_url`: [`DEFAULT_GRAPHQL_URL`]
/// - `rest_url`: [`DEFAULT_REST_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct GitlabConfigBuilder {
    graphql_url: Option<String>,
    rest_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl GitlabConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = Some(url.into());
        self
    }

    /// Sets the versioned REST endpoint.
    #[must_use]
    pub fn rest_url(mut self, url: impl Into<String>) -> Self {
        self.rest_url = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GitlabConfig`], validating the endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if either URL is invalid.
    pub fn build(self) -> Result<GitlabConfig, ConfigError> {
        let defaults = GitlabConfig::default();

        let graphql_url = self
            .graphql_url
            .map_or(Ok(defaults.graphql_url), EndpointUrl::new)?;
        let rest_url = self
            .rest_url
            .map_or(Ok(defaults.rest_url), EndpointUrl::new)?;

        Ok(GitlabConfig {
            graphql_url,
            rest_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
