//! Error types for client configuration.
//!
//! This module contains the error type returned when configuration values
//! or validated newtypes are constructed from invalid input.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use gitlab_graphql::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please log in to obtain a GitLab access token.")]
    EmptyAccessToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://gitlab.com/api/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Project path is invalid.
    #[error("Invalid project path '{path}'. Expected format: 'namespace/project'.")]
    InvalidProjectPath {
        /// The invalid path that was provided.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_url_error_message() {
        let error = ConfigError::InvalidEndpointUrl {
            url: "gitlab.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'gitlab.com'"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_invalid_project_path_error_message() {
        let error = ConfigError::InvalidProjectPath {
            path: "/".to_string(),
        };
        assert!(error.to_string().contains("namespace/project"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
