//! REST API client for GitLab.
//!
//! A thin sibling of the GraphQL client for endpoints GraphQL does not
//! expose, such as the project members listing.
//!
//! - [`RestClient`]: `get()` and `post()` binding JSON into a caller shape
//! - [`RestError`]: invalid path, HTTP, and decode failures
//!
//! Paths are relative to the configured REST endpoint; surrounding slashes
//! are ignored and an empty path is rejected before anything is sent.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
