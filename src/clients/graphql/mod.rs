//! GraphQL API client for GitLab.
//!
//! This module provides a higher-level GraphQL client built on top of the
//! [`Transport`](crate::clients::Transport) seam. Callers describe what they
//! want as a [`Shape`](crate::graphql::Shape); the client assembles the
//! document, sends it and binds the response.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: `query()`, `mutate()` and `pages()` over a transport
//! - [`GraphqlError`]: transport, decode and server-reported failures
//!
//! # Response Structure
//!
//! GitLab answers GraphQL requests with HTTP 200 even when the query fails.
//! The body carries `data` and an optional `errors` list; a non-empty list
//! always fails the call, whatever `data` holds.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
