//! HTTP client types for GitLab API communication.
//!
//! This module provides the transport layer for making authenticated,
//! blocking requests to the GitLab GraphQL and REST endpoints.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The seam every client sends requests through
//! - [`HttpClient`]: The blocking `reqwest` implementation of [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`DataType`]: Content types for request bodies
//! - [`graphql::GraphqlClient`]: Shape-driven GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//! - [`rest::RestClient`]: REST client for the v4 API
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,no_run
//! use gitlab_graphql::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
//! use gitlab_graphql::{AccessToken, GitlabConfig, Session};
//!
//! let config = GitlabConfig::default();
//! let session = Session::bearer(AccessToken::new("glpat-token").unwrap());
//! let client = HttpClient::new(config.graphql_url(), &session, Some(&config));
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "")
//!     .body(r#"{"query":"{currentUser{username,}}","variables":{}}"#)
//!     .body_type(DataType::Json)
//!     .build()
//!     .unwrap();
//!
//! let body = client.request(request).unwrap();
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. Any non-2xx status becomes
//! [`HttpError::Response`], carrying the raw body and the `X-Request-Id`.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
pub mod rest;
#[cfg(test)]
pub(crate) mod testing;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, Transport, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError};
