//! GraphQL-specific error types.
//!
//! Every GraphQL call ends in exactly one of three failures, or success:
//!
//! - [`GraphqlError::Transport`]: the request never produced a usable body
//! - [`GraphqlError::Decode`]: the body is not a valid envelope for the shape
//! - [`GraphqlError::Api`]: the server reported errors in the envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_graphql::clients::graphql::GraphqlError;
//!
//! match client.query(&mut shape, &variables) {
//!     Ok(()) => println!("{:?}", shape),
//!     Err(GraphqlError::Api { messages }) => eprintln!("{}", messages.join("\n")),
//!     Err(error) => eprintln!("request failed: {error}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use gitlab_graphql::clients::graphql::GraphqlError;
///
/// let error = GraphqlError::Api {
///     messages: vec!["Field 'nme' doesn't exist on type 'Project'".to_string()],
/// };
/// assert!(error.to_string().contains("nme"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The transport failed: network error, non-2xx status, or invalid request.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body could not be decoded into the requested shape.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server reported one or more GraphQL errors.
    #[error("GraphQL API error: {}", .messages.join("; "))]
    Api {
        /// The reported messages, verbatim and in order.
        messages: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_transport_variant_wraps_http_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 401,
            message: r#"{"message":"401 Unauthorized"}"#.to_string(),
            error_reference: None,
        });

        let error: GraphqlError = http_error.into();
        assert!(matches!(error, GraphqlError::Transport(_)));
        assert!(error.to_string().contains("401 Unauthorized"));
    }

    #[test]
    fn test_decode_variant_wraps_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: GraphqlError = serde_error.into();

        assert!(matches!(error, GraphqlError::Decode(_)));
        assert!(error.to_string().starts_with("Failed to decode GraphQL response"));
    }

    #[test]
    fn test_api_variant_joins_messages() {
        let error = GraphqlError::Api {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(error.to_string(), "GraphQL API error: first; second");
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &GraphqlError::Api { messages: vec![] };
        let _ = error;
    }
}
