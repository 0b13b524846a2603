//! REST-specific error types.
//!
//! # Error Handling
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//! - [`RestError::Decode`]: When the response body does not fit the target shape
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_graphql::clients::rest::{RestClient, RestError};
//!
//! let mut members: Vec<User> = Vec::new();
//! match client.get("projects/group%2Fproject/users", &mut members) {
//!     Ok(()) => println!("{} members", members.len()),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//!     Err(RestError::Decode(e)) => println!("Unexpected body: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use gitlab_graphql::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded into the target shape.
    #[error("Failed to decode REST response: {0}")]
    Decode(#[from] serde_json::Error),
}
